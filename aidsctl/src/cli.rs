use clap::{value_parser, Arg, Command};

pub fn command() -> Command {
    Command::new("aidsctl")
        .about("Command line client for the AIDS dataset service.")
        .arg(Arg::new("base_url")
            .long("base-url")
            .env("AIDS_BASE_URL")
            .default_value(aids::LOCAL_BASE_URL)
            .global(true)
            .help("gRPC-Web address of the dataset service."))
        .subcommand_required(true)
        .subcommand(Command::new("dataset")
            .about("Manage saved datasets.")
            .subcommand_required(true)
            .subcommand(Command::new("chart")
                .about("Fetch a chart of two dataset columns.")
                .arg(id_arg())
                .arg(Arg::new("X_AXIS").required(true)
                    .help("column plotted on the x axis."))
                .arg(Arg::new("Y_AXIS").required(true)
                    .help("column plotted on the y axis.")))
            .subcommand(Command::new("delete")
                .about("Delete a dataset.")
                .arg(id_arg()))
            .subcommand(Command::new("download")
                .about("Download the first chunk of a dataset.")
                .arg(id_arg())
                .arg(Arg::new("output").short('o').long("output")
                    .help("file to write the chunk to, stdout if absent.")))
            .subcommand(Command::new("list")
                .about("List saved datasets."))
            .subcommand(Command::new("summary")
                .about("Print the summary statistics of a dataset.")
                .arg(id_arg()))
            .subcommand(Command::new("upload")
                .about("Upload a csv file.")
                .arg(Arg::new("FILE").required(true)
                    .help("path of the csv file."))))
}

fn id_arg() -> Arg {
    Arg::new("ID")
        .required(true)
        .value_parser(value_parser!(i32))
        .help("dataset identifier.")
}
