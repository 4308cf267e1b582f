// KRS Capital Monitor - Core Library
// Watches companies in the Polish National Court Register (KRS) and
// reports share-capital changes inside a trailing date window.

pub mod config;
pub mod delivery;
pub mod detector;
pub mod extract;
pub mod fetch;
pub mod index;
pub mod monitor;
pub mod report;
pub mod resolver;
pub mod sources;
pub mod window;

// Re-export commonly used types
pub use config::{load_from_env, MonitorConfig};
pub use delivery::{ConsoleSink, DeliverySink, SmtpConfig, SmtpSink};
pub use detector::{CapitalChangeDetector, ChangeEvent};
pub use extract::{AttributeRecord, CompanyExtract, FullExtract, RawEntry};
pub use fetch::{ExtractFetcher, KrsApiFetcher};
pub use index::EntryIndex;
pub use monitor::Monitor;
pub use report::ReportRenderer;
pub use resolver::{AttributeHistoryResolver, ResolvedChange};
pub use sources::{read_recipients, read_registry_ids};
pub use window::DateWindow;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
