use crate::domain::{Command, GenerateArgs, OutputTarget, RemoveTarget};
use clap::builder::ArgAction;
use clap::error::ErrorKind;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;
use std::path::PathBuf;

const BIN_NAME: &str = "apology";

/// CLI から受け取った設定
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub help: bool,
    pub home_dir: Option<PathBuf>,
    /// サブコマンド（None の場合は Help）
    pub command: Option<Command>,
}

/// 解析結果: 通常の Config、補完スクリプト生成、または clap が組み立てたヘルプ文
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
    /// サブコマンドの -h / --help（表示して終了）
    HelpText(String),
}

fn global_args(cmd: clap::Command) -> clap::Command {
    cmd.disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .value_name("directory")
                .help("Home directory for settings, history and logs (overrides APOLOGY_HOME)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

fn build_generate_subcommand() -> clap::Command {
    let cmd = clap::Command::new("generate")
        .about("Generate an apology and record it in the history")
        .arg(
            clap::Arg::new("name")
                .short('n')
                .long("name")
                .value_name("name")
                .help("Who the apology is for")
                .required(true),
        )
        .arg(
            clap::Arg::new("message")
                .short('m')
                .long("message")
                .value_name("message")
                .help("The apology line to repeat")
                .required(true),
        )
        .arg(
            clap::Arg::new("count")
                .short('c')
                .long("count")
                .value_name("1..1000")
                .help("How many times to repeat the message (default: settings, else 100)")
                .value_parser(value_parser!(i64))
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::new("style")
                .short('s')
                .long("style")
                .value_name("style")
                .help("heartfelt, poetic, sincere or playful (default: settings, else heartfelt)"),
        )
        .arg(
            clap::Arg::new("output")
                .short('o')
                .long("output")
                .value_name("file")
                .help("Also write the apology to this file")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("save"),
        )
        .arg(
            clap::Arg::new("save")
                .long("save")
                .help("Also write the apology to apology-YYYY-MM-DD.txt")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("stats")
                .long("stats")
                .help("Print character/word counts and the love level to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("no-history")
                .long("no-history")
                .help("Do not record this apology in the history")
                .action(ArgAction::SetTrue),
        );
    help_arg(flag_args(cmd))
}

/// サブコマンド用の -h / --help（ルートの disable_help_flag が子にも伝播するため明示的に付ける）
fn help_arg(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::Arg::new("help")
            .short('h')
            .long("help")
            .help("Print help")
            .action(ArgAction::Help),
    )
}

/// --emojis / --no-emojis と --timestamp / --no-timestamp。後に書いた方が勝つ。
fn flag_args(cmd: clap::Command) -> clap::Command {
    cmd.arg(
        clap::Arg::new("emojis")
            .long("emojis")
            .help("Add a random heart to every fifth line")
            .action(ArgAction::SetTrue)
            .overrides_with("no-emojis"),
    )
    .arg(
        clap::Arg::new("no-emojis")
            .long("no-emojis")
            .help("No hearts, even if settings enable them")
            .action(ArgAction::SetTrue)
            .overrides_with("emojis"),
    )
    .arg(
        clap::Arg::new("timestamp")
            .long("timestamp")
            .help("Start with the current date and time")
            .action(ArgAction::SetTrue)
            .overrides_with("no-timestamp"),
    )
    .arg(
        clap::Arg::new("no-timestamp")
            .long("no-timestamp")
            .help("No date header, even if settings enable it")
            .action(ArgAction::SetTrue)
            .overrides_with("timestamp"),
    )
}

/// on / off のどちらも無ければ None（設定に従う）
fn switch(m: &clap::ArgMatches, on: &str, off: &str) -> Option<bool> {
    if m.get_flag(on) {
        Some(true)
    } else if m.get_flag(off) {
        Some(false)
    } else {
        None
    }
}

fn build_history_subcommand() -> clap::Command {
    help_arg(clap::Command::new("history"))
        .about("List, replay or delete recent apologies (newest first, at most 10)")
        .subcommand_required(true)
        .subcommand(help_arg(clap::Command::new("list")).about("List the history"))
        .subcommand(flag_args(help_arg(
            clap::Command::new("replay")
                .about("Generate again from a history entry")
                .arg(
                    clap::Arg::new("id")
                        .value_name("id")
                        .required(true)
                        .value_parser(value_parser!(u64)),
                ),
        )))
        .subcommand(
            help_arg(clap::Command::new("rm"))
                .about("Delete history entries by id or by exact timestamp")
                .arg(
                    clap::Arg::new("id")
                        .long("id")
                        .value_name("id")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    clap::Arg::new("timestamp")
                        .long("timestamp")
                        .value_name("timestamp")
                        .help("Removes every entry with this timestamp"),
                )
                .group(
                    clap::ArgGroup::new("target")
                        .args(["id", "timestamp"])
                        .required(true),
                ),
        )
}

fn build_clap_command() -> clap::Command {
    global_args(
        clap::Command::new(BIN_NAME)
            .about("Heartfelt apology generator")
            .subcommand_required(false)
            .subcommand(build_generate_subcommand())
            .subcommand(
                help_arg(clap::Command::new("repeat"))
                    .about("Print a name N times as a numbered list")
                    .arg(clap::Arg::new("name").required(true))
                    .arg(
                        clap::Arg::new("count")
                            .required(true)
                            .value_parser(value_parser!(i64))
                            .allow_hyphen_values(true),
                    ),
            )
            .subcommand(help_arg(clap::Command::new("styles")).about("List the available styles"))
            .subcommand(build_history_subcommand()),
    )
}

fn generate_args(m: &clap::ArgMatches) -> GenerateArgs {
    let output = if let Some(path) = m.get_one::<PathBuf>("output") {
        OutputTarget::File(path.clone())
    } else if m.get_flag("save") {
        OutputTarget::DefaultFile
    } else {
        OutputTarget::Stdout
    };
    GenerateArgs {
        name: m.get_one::<String>("name").cloned().unwrap_or_default(),
        message: m.get_one::<String>("message").cloned().unwrap_or_default(),
        count: m.get_one::<i64>("count").copied(),
        style: m.get_one::<String>("style").cloned(),
        emojis: switch(m, "emojis", "no-emojis"),
        timestamp: switch(m, "timestamp", "no-timestamp"),
        output,
        stats: m.get_flag("stats"),
        record: !m.get_flag("no-history"),
    }
}

fn history_command(m: &clap::ArgMatches) -> Option<Command> {
    match m.subcommand() {
        Some(("list", _)) => Some(Command::HistoryList),
        Some(("replay", r)) => Some(Command::HistoryReplay {
            id: r.get_one::<u64>("id").copied()?,
            emojis: switch(r, "emojis", "no-emojis"),
            timestamp: switch(r, "timestamp", "no-timestamp"),
        }),
        Some(("rm", r)) => {
            let target = match r.get_one::<u64>("id") {
                Some(id) => RemoveTarget::Id(*id),
                None => RemoveTarget::Timestamp(r.get_one::<String>("timestamp").cloned()?),
            };
            Some(Command::HistoryRemove(target))
        }
        _ => None,
    }
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let help = matches.get_flag("help");
    let home_dir = matches.get_one::<PathBuf>("home-dir").cloned();

    let command = match matches.subcommand() {
        Some(("generate", m)) => Some(Command::Generate(generate_args(m))),
        Some(("repeat", m)) => Some(Command::Repeat {
            name: m.get_one::<String>("name").cloned().unwrap_or_default(),
            count: m.get_one::<i64>("count").copied().unwrap_or(0),
        }),
        Some(("styles", _)) => Some(Command::Styles),
        Some(("history", m)) => history_command(m),
        _ => None,
    };

    Config {
        help,
        home_dir,
        command,
    }
}

/// 任意の引数列を解析する（先頭はプログラム名）
pub fn parse_from<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match build_clap_command().try_get_matches_from(args) {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            return Ok(ParseOutcome::HelpText(e.render().to_string()));
        }
        Err(e) => return Err(Error::invalid_argument(e.to_string())),
    };

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_from(std::env::args_os())
}

/// 補完スクリプトを標準出力に出力する
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}

/// Config を Command に変換する。None ならヘルプを表示する。
pub fn config_to_command(config: &Config) -> Option<Command> {
    if config.help {
        return None;
    }
    config.command.clone()
}
