//! Driver for refreshing the SDK's protobufs.
//!
//! One run brings the protobufs checkout up to date, regenerates
//! `RequestType.java` and `Status.java` from the enums in `BasicTypes.proto` and
//! `ResponseCode.proto`, and replaces the SDK's copy of the `.proto` files with
//! package-rewritten versions from the checkout.

pub mod args;
pub mod git;
pub mod logging;
pub mod mirror;
pub mod targets;

use anyhow::{Context, Result};
use std::fs;
use tracing::info;

pub use args::{CliArgs, Paths};
pub use targets::{EnumTarget, REQUEST_TYPE, STATUS, TARGETS};

/// Run every step of the update.
///
/// Both Java enums are generated in memory before either file is written, so
/// a malformed proto leaves the existing sources untouched.
pub fn run(args: &CliArgs) -> Result<()> {
    let paths = args.paths();

    if args.skip_fetch {
        info!(path = %args.repo_dir.display(), "skipping protobufs fetch");
    } else {
        git::ensure_checkout(&args.remote, &args.repo_dir, &args.branch)?;
    }

    let premade_dir = args.premade_dir.as_deref();
    let generated = TARGETS
        .iter()
        .map(|target| Ok((target, target.generate(&paths.proto_in, premade_dir)?)))
        .collect::<Result<Vec<_>>>()?;

    fs::create_dir_all(&paths.java_out)
        .with_context(|| format!("failed to create {}", paths.java_out.display()))?;
    for (target, codegen) in &generated {
        let path = target.output_path(&paths.java_out);
        codegen
            .write_to_file(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    mirror::clear_proto_dir(&paths.proto_out, &args.keep)?;
    mirror::copy_modified_protos(&paths.proto_in, &paths.proto_out)?;

    info!("done");
    Ok(())
}
