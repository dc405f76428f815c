mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{config_to_command, parse_args, print_completion, ParseOutcome};
use common::error::Error;
use common::ports::outbound::LogRecord;
use domain::{Command, HistoryList, Style, TextStats};
use ports::inbound::UseCaseRunner;
use wiring::{wire_apology, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record.layer("cli"));
    }

    fn dispatch(&self, command: Command) -> Result<i32, Error> {
        let uc = &self.app.use_case;
        match command {
            Command::Generate(args) => {
                let outcome = uc.generate(&args)?;
                println!("{}", outcome.text);
                if let (Some(entry), None) = (&outcome.recorded, &outcome.history_error) {
                    eprintln!("apology: recorded as #{}", entry.id);
                }
                if let Some(path) = &outcome.saved_to {
                    eprintln!("apology: saved to {}", path.display());
                }
                if args.stats {
                    print_stats(&outcome.stats);
                }
                if let Some(e) = &outcome.history_error {
                    // 生成結果は有効なので終了コードは 0 のまま
                    eprintln!("apology: warning: history not saved: {}", e);
                    self.log(
                        LogRecord::warn("history not saved")
                            .kind("history")
                            .field("error", e.to_string()),
                    );
                }
                if let Some(e) = &outcome.save_error {
                    // 本文は出力済み。保存できなかったことは終了コードで伝える
                    eprintln!("apology: could not save the file: {}", e);
                    self.log(
                        LogRecord::error("output file not saved")
                            .kind("output")
                            .field("error", e.to_string()),
                    );
                    return Ok(e.exit_code());
                }
                Ok(0)
            }
            Command::Repeat { name, count } => {
                print!("{}", uc.repeat(&name, count));
                Ok(0)
            }
            Command::Styles => {
                for style in Style::ALL {
                    let t = style.template();
                    println!("{:<10} {}<message>{}", style.name(), t.prefix, t.suffix);
                }
                Ok(0)
            }
            Command::HistoryList => {
                print_history(&uc.list_history());
                Ok(0)
            }
            Command::HistoryReplay {
                id,
                emojis,
                timestamp,
            } => {
                println!("{}", uc.replay(id, emojis, timestamp)?);
                Ok(0)
            }
            Command::HistoryRemove(target) => {
                let remaining = uc.remove_history(&target)?;
                eprintln!("apology: {} history entries remain", remaining.len());
                Ok(0)
            }
        }
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, command: Command) -> Result<i32, Error> {
        let command_name = command.name();
        self.log(
            LogRecord::info("command started")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = self.dispatch(command);

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.log(
            LogRecord::info("command finished")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.log(LogRecord::error(e.to_string()).kind("error"));
        }
        result
    }
}

fn print_stats(stats: &TextStats) {
    eprintln!(
        "characters: {}  words: {}  love level: {}",
        stats.chars,
        stats.words,
        stats.love_meter()
    );
}

fn print_history(list: &HistoryList) {
    if list.is_empty() {
        println!("(no history)");
        return;
    }
    for e in list.entries() {
        println!(
            "{}  {}  To: {}  {} ({}x, {})",
            e.id, e.timestamp, e.name, e.message, e.count, e.style
        );
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("apology: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
        ParseOutcome::HelpText(text) => {
            print!("{}", text);
            return Ok(0);
        }
    };
    let Some(command) = config_to_command(&config) else {
        print_help();
        return Ok(0);
    };
    let runner = Runner {
        app: wire_apology(config.home_dir)?,
    };
    runner.run(command)
}

fn print_usage() {
    eprintln!("Usage: apology [options] <generate|repeat|styles|history> ...");
}

fn print_help() {
    println!("Usage: apology [options] <command> [args...]");
    println!("Commands:");
    println!("  generate -n <name> -m <message> [-c <count>] [-s <style>] [--[no-]emojis] [--[no-]timestamp]");
    println!("           [-o <file> | --save] [--stats] [--no-history]");
    println!("                                Build the apology, print it and record it in the history");
    println!("  repeat <name> <count>         Print '1- name', '2- name', ... (count <= 0 prints nothing)");
    println!("  styles                        List the styles: heartfelt, poetic, sincere, playful");
    println!("  history list                  Show the 10 most recent apologies, newest first");
    println!("  history replay <id> [--[no-]emojis] [--[no-]timestamp]");
    println!("                                Generate again from a history entry");
    println!("  history rm (--id <id> | --timestamp <ts>)");
    println!("                                Delete history entries (--timestamp removes every match)");
    println!("Options:");
    println!("  -h, --help                    Show this help message (also after any command)");
    println!("  -d, --home-dir <directory>    Home directory (default: $APOLOGY_HOME, else ~/.config/apology)");
    println!("  --generate <shell>            Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  APOLOGY_HOME      Home directory. Settings: $APOLOGY_HOME/config/settings.json;");
    println!("                    history: $APOLOGY_HOME/data/store/apologyHistory.json");
    println!("  APOLOGY_LOG_FILE  JSONL log file (default: $APOLOGY_HOME/state/apology.log.jsonl)");
    println!();
    println!("Examples:");
    println!("  apology generate -n Alex -m 'Sorry!' -c 3");
    println!("  apology generate -n Alex -m 'I was wrong' -s poetic --emojis --save");
    println!("  apology history rm --id 1792411200000");
}
