// Mon Aug 3 2026 - Alex

pub mod logging;
