use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_REMOTE: &str = "https://github.com/hashgraph/hedera-protobufs.git";

/// CLI arguments for the update-protobufs binary.
#[derive(Parser, Debug)]
#[command(
    name = "update-protobufs",
    version,
    about = "Refresh the SDK protobufs and regenerate RequestType.java and Status.java"
)]
pub struct CliArgs {
    /// Branch of the protobufs repository to check out.
    pub branch: String,

    /// Local checkout of the protobufs repository (cloned when missing).
    #[arg(long, default_value = "hedera-protos-git")]
    pub repo_dir: PathBuf,

    /// Remote the checkout is cloned from.
    #[arg(long, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// The SDK's `src/main` directory.
    #[arg(long, default_value = "../sdk/src/main")]
    pub sdk_main: PathBuf,

    /// Directory with `<Class>-<n>.txt` fragments overriding the built-in boilerplate.
    #[arg(long)]
    pub premade_dir: Option<PathBuf>,

    /// Use the checkout as it is, without cloning, switching or pulling.
    #[arg(long)]
    pub skip_fetch: bool,

    /// File names in the proto output directory that are never removed.
    #[arg(long = "keep", value_delimiter = ',', default_value = "TransactionList.proto")]
    pub keep: Vec<String>,
}

/// Locations derived from the arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// `.proto` files of the checkout.
    pub proto_in: PathBuf,
    /// Where the SDK keeps its copy of the `.proto` files.
    pub proto_out: PathBuf,
    /// Package directory of the generated Java enums.
    pub java_out: PathBuf,
}

impl CliArgs {
    pub fn paths(&self) -> Paths {
        Paths {
            proto_in: self.repo_dir.join("services"),
            proto_out: self.sdk_main.join("proto"),
            java_out: self
                .sdk_main
                .join("java")
                .join("com")
                .join("hedera")
                .join("hashgraph")
                .join("sdk"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["update-protobufs", "main"]);
        assert_eq!(args.branch, "main");
        assert_eq!(args.repo_dir, PathBuf::from("hedera-protos-git"));
        assert_eq!(args.remote, DEFAULT_REMOTE);
        assert_eq!(args.keep, vec!["TransactionList.proto"]);
        assert!(!args.skip_fetch);
        assert!(args.premade_dir.is_none());
    }

    #[test]
    fn test_paths() {
        let args = CliArgs::parse_from([
            "update-protobufs",
            "v0.40.0",
            "--repo-dir",
            "protos",
            "--sdk-main",
            "sdk/src/main",
        ]);
        let paths = args.paths();
        assert_eq!(paths.proto_in, PathBuf::from("protos/services"));
        assert_eq!(paths.proto_out, PathBuf::from("sdk/src/main/proto"));
        assert_eq!(
            paths.java_out,
            PathBuf::from("sdk/src/main/java/com/hedera/hashgraph/sdk")
        );
    }

    #[test]
    fn test_keep_list() {
        let args = CliArgs::parse_from([
            "update-protobufs",
            "main",
            "--keep",
            "TransactionList.proto,Extra.proto",
        ]);
        assert_eq!(args.keep, vec!["TransactionList.proto", "Extra.proto"]);
    }

    #[test]
    fn test_branch_required() {
        assert!(CliArgs::try_parse_from(["update-protobufs"]).is_err());
    }
}
