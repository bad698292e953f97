use mazepath::app::App;

fn main() -> std::io::Result<()> {
    // The alternate screen owns stdout, so logs go to a file
    let file_appender = tracing_appender::rolling::never(".", "mazepath.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    // Optional `mazepath [rows cols]`; otherwise sized to the terminal
    let args = std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<u16>())
        .collect::<Result<Vec<_>, _>>();
    let dims = match args.as_deref() {
        Ok([]) => None,
        Ok([rows, cols]) => Some((*rows, *cols)),
        _ => {
            eprintln!("usage: mazepath [rows cols]");
            return Ok(());
        }
    };

    let app = App::new(dims)?;
    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run();
    App::restore_terminal(&mut stdout)?;
    result
}
