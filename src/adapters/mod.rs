//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter        | Implements         | Connects to              |
//! |----------------|--------------------|--------------------------|
//! | `file_config`  | ConfigPort         | JSON file on disk        |
//! | `log_sink`     | EventSink          | `log` facade             |
//! | `publisher`    | FanCommandPort     | JSON lines on a writer   |

pub mod file_config;
pub mod log_sink;
pub mod publisher;
