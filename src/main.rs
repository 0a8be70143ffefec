use std::io::{self, BufRead as _};

use addemup::parse_tree;

fn main() {
    let input = io::stdin();
    let mut input = input.lock();
    let mut buf = String::new();

    loop {
        buf.clear();
        match input.read_line(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => (),
        }

        // Only the line terminator is stripped, sentinel matching is
        // exact so `exit ` or ` exit` is parsed as an expression.
        let line = buf.strip_suffix('\n').unwrap_or(&buf);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match line {
            "exit" | "Exit" | "EXIT" => break,
            _ => match parse_tree(line) {
                Ok(expr) => println!("{}", expr.calc()),
                Err(e) => println!("Error: {e}"),
            },
        }
    }
}
