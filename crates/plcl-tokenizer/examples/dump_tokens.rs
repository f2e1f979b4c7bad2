use std::io::Read;
use plcl_tokenizer::Tokenizer;

fn main() {
    let mut source = String::new();
    std::io::stdin().read_to_string(&mut source).unwrap();

    for tok in Tokenizer::new(&source) {
        println!("{}:{}\t{:?}\t{:?}", tok.line, tok.column, tok.kind, tok.text);
    }
}
