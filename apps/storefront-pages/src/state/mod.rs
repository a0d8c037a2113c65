//! # State Module
//!
//! Widget state and the handlers bound to each page.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Widget Architecture                                  │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │               DocumentState  (Arc<Mutex<Document>>)             │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │          │              │               │               │               │
//! │          ▼              ▼               ▼               ▼               │
//! │  ┌────────────┐ ┌──────────────┐ ┌──────────────┐ ┌───────────────┐     │
//! │  │ CartWidget │ │  FormWidget  │ │ ProductList  │ │ Bench / Clock │     │
//! │  │ CartState  │ │ StorefrontApi│ │ StorefrontApi│ │ PageConfig    │     │
//! │  └────────────┘ └──────────────┘ └──────────────┘ └───────────────┘     │
//! │                                                                         │
//! │  Each widget checks its element ids at mount. A missing id fails that   │
//! │  widget only.                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod bench;
pub mod cart;
pub mod clock;
pub mod config;
pub mod form;
pub mod products;

pub use bench::{DedupBenchWidget, DomBenchWidget};
pub use cart::{Cart, CartState, CartWidget};
pub use clock::ClockWidget;
pub use config::PageConfig;
pub use form::{FormWidget, SubmitOutcome};
pub use products::{LoadOutcome, ProductListWidget};
