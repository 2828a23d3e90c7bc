pub mod http;
pub mod rendering;
pub mod services;
pub mod ui;

pub use http::PricesHttpClient;
pub use rendering::{CanvasLineRenderer, ChartSurface};
pub use services::{BrowserTimeProvider, ConsoleLogger};
pub use ui::{CardBoard, DomCardBoard, HostElementIds};
