use plainarg::CommandLineParser;

fn main() {
    let mut clp = CommandLineParser::new("sample").about("A program which does things.");
    let filename = clp
        .required("filename", "The input file.")
        .expect("The parser must be configurable.");
    let stuff = clp
        .optional_with_default("stuff", "Some stuff.", "d")
        .expect("The parser must be configurable.");
    let some_option = clp
        .option("some-option", Some('s'), "Some option.")
        .expect("The parser must be configurable.");
    let a_flag = clp
        .flag("a-flag", Some('f'), "A flag.")
        .expect("The parser must be configurable.");

    let bindings = clp.build().parse();

    println!("filename: {}", bindings.get(&filename));
    println!("stuff: {}", bindings.get(&stuff));
    println!("some-option: {:?}", bindings.get(&some_option));
    println!("a-flag: {}", bindings.get(&a_flag));
}
