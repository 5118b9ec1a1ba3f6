use dateparse::parse_any;

fn main() {
    let date: String = std::env::args().nth(1).unwrap_or("".to_string());
    println!("{}", parse_any(&date).unwrap())
}
