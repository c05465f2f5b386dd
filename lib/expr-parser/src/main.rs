use log::LevelFilter;
use simplelog::*;

use expr_parser::normalize;

fn main() {
    TermLogger::init(LevelFilter::Debug, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    // let s = "(A & B) > C";
    // let s = "~((A ? B) & C)";
    let s = std::env::args().nth(1).unwrap_or_else(|| "P & ~(S ? Q)".to_string());
    println!("Input: {:?}", s);
    let preorder = normalize(&s);
    println!("Parsed: {:?}", preorder);
    if let Ok(preorder) = preorder {
        println!("Preorder: {:#}", preorder);
        println!("Preorder: {}", preorder);
    }
}
