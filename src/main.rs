//! punchcard main entrypoint.

use punchcard::run;
use punchcard::ui::messages;

fn main() {
    println!();
    if let Err(e) = run() {
        messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
