#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::io::BufReader;

use clap::Parser;
use propkb::context::KnowledgeBase;

mod config;
mod session;

use config::Args;
use session::{Session, SessionOptions};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let options = SessionOptions {
        proof: args.proof,
        stats: args.stats,
    };
    let mut session = Session::new(KnowledgeBase::from_config(config), options);

    if args.files.is_empty() {
        if let Err(e) = session.read(std::io::stdin().lock()) {
            println!("c Failed to read stdin: {e}");
            std::process::exit(1);
        }
    }

    for path in &args.files {
        println!("c Reading commands from {path:?}");

        let file = match std::fs::File::open(path) {
            Ok(file) => file,
            Err(e) => {
                println!("c Failed to open {path:?}: {e}");
                std::process::exit(1);
            }
        };

        if let Err(e) = session.read(BufReader::new(file)) {
            println!("c Failed to read {path:?}: {e}");
            std::process::exit(1);
        }
    }
}
