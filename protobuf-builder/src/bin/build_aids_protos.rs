//! Regenerates `protobuf/src/aids.rs` from `protobuf/proto/aids.proto`.
//!
//! Run with `cargo run -p aids-protobuf-builder` after editing the proto.

use std::error::Error;
use std::path::Path;

const PROTOS_DIR: &str = "protobuf/proto";
const PROTO_FILE: &str = "aids.proto";
const OUTPUT_RUST_DIR: &str = "protobuf/src";

fn main() -> Result<(), Box<dyn Error>> {
    // initialize logger
    env_logger::init();

    let workspace_dir = match Path::new(env!("CARGO_MANIFEST_DIR")).parent() {
        Some(workspace_dir) => workspace_dir,
        None => return Err("failed to find workspace root".into()),
    };

    let definitions_dir = workspace_dir.join(PROTOS_DIR);
    if !definitions_dir.join(PROTO_FILE).exists() {
        return Err(format!("missing proto file '{}'",
            definitions_dir.join(PROTO_FILE).display()).into());
    }

    let output_dir = workspace_dir.join(OUTPUT_RUST_DIR);
    log::info!("running codegen [definitions={:?}, output={:?}]",
        definitions_dir, output_dir);

    aids_protobuf_builder::generate_rust_code(&definitions_dir,
        &[PROTO_FILE], &output_dir)?;

    Ok(())
}
