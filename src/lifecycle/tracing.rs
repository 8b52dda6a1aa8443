//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber for the binary.
//!
//! ## Configuration
//!
//! - **Level** comes from `RUST_LOG`. When it is unset only `ERROR` events pass.
//! - **Compact format** with module paths hidden (`with_target(false)`).
//! - **stderr** only. The showcase report goes to stdout, so the two streams never
//!   interleave and `creational builder > phones.txt` captures just the report.
//! - **ANSI colors** only when `ansi` is set and stderr is a terminal.
//!
//! A rejected selection is logged at `warn`. The binary prints the user-facing
//! message itself, so with the default filter it appears exactly once.
//!
//! ## What Gets Traced
//!
//! - **Selection**: the chosen kind or family (`info`), rejected keys (`warn`)
//! - **Construction**: every slot write and finished phone, every creation step (`debug`)
//! - **Orchestration**: orders placed and menus served (`info`), each inside a span
//!   named after the demonstration (`builder`, `factory_method`, `abstract_factory`)
//!
//! ## Usage Examples
//!
//! ```bash
//! # Selections and orchestration only
//! RUST_LOG=info creational factory-method --kind beef
//!
//! # Every slot write and creation step
//! RUST_LOG=debug creational builder
//! ```
//!
//! With `RUST_LOG=debug`, building the basic phone shows:
//!
//! ```text
//! DEBUG builder: Slot set slot="CPU" value=Mediatek
//! DEBUG builder: Slot set slot="RAM" value=4 GB
//! DEBUG builder: Slot set slot="Camera" value=8 MP
//! DEBUG builder: Slot set slot="Storage" value=16 GB
//! DEBUG builder: Phone built phone=Phone { cpu: Some("Mediatek"), ... }
//! ```

use std::io::IsTerminal;

pub fn setup_tracing(ansi: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(ansi && std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .init();
}
