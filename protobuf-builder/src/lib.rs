//! Generates the `aids` message and client code checked in under
//! `protobuf/src`. `tonic_build` relies on `prost`, which needs `protoc`
//! on the path.

use std::path::Path;

/// Compiles `proto_paths` (relative to `definitions_dir`) into one rust
/// file per protobuf package in `output_dir`.
pub fn generate_rust_code(definitions_dir: impl AsRef<Path>,
        proto_paths: &[impl AsRef<Path>], output_dir: impl AsRef<Path>)
        -> std::io::Result<()> {
    tonic_build::configure()
        .out_dir(output_dir.as_ref())
        .build_client(true)
        .build_server(false)
        .build_transport(false) // transport is chosen by the aids crate
        .compile_protos(proto_paths, &[definitions_dir])
}
