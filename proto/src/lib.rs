//! Generated OpAMP protobuf message types plus a handful of hand-written
//! trait implementations (equality ignoring timestamps, redacted `Debug`
//! output for payloads that may carry customer config bodies).
//!
//! The generated code lives in `src/proto.rs` and is committed so that
//! downstream crates do not need `protoc` on their machine to build. Set
//! `REBUILD_PROTO=1` to regenerate it from `opamp-spec/proto/*.proto` via
//! `build.rs`.

pub mod proto;
mod impls;
