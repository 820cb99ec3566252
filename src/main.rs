use std::process;

fn main() {
    match pathsearch::solver() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    }
}
