//! Line-oriented driver for a [`treeview::Tree`].
//!
//! Loads a JSON forest, draws its rows as indented text and reads
//! interactions from stdin:
//!
//! ```text
//! toggle <row>      expand or collapse a row
//! select <row>      select or deselect a row
//! location [href]   set or clear the current location
//! remove            tear the tree down
//! quit
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;
use treeview::{Affordance, Row, Tree, TreeError, TreeEvent, TreeOptions};

const USAGE: &str = "usage: treeview-cli <data.json> [--options <options.json>] \
                     [--levels <n>] [--location <href>] [--links] [--tags]";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

struct Args {
    data: String,
    options: TreeOptions,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, CliError> {
        let mut data = None;
        let mut options = TreeOptions::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let path = value(&mut args, "--options")?;
                    // Flags given after the file override it.
                    options = TreeOptions::from_json(&fs::read_to_string(path)?)?;
                }
                "--levels" => {
                    let levels = value(&mut args, "--levels")?;
                    options.levels = levels
                        .parse()
                        .map_err(|_| CliError::Usage(format!("invalid levels: {}", levels)))?;
                }
                "--location" => options.location = Some(value(&mut args, "--location")?),
                "--links" => options.enable_links = true,
                "--tags" => options.show_tags = true,
                _ if data.is_none() && !arg.starts_with("--") => data = Some(arg),
                _ => return Err(CliError::Usage(format!("unexpected argument: {}", arg))),
            }
        }

        let data = data.ok_or_else(|| CliError::Usage(USAGE.to_string()))?;
        Ok(Self { data, options })
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, CliError> {
    args.next()
        .ok_or_else(|| CliError::Usage(format!("{} needs a value", flag)))
}

/// Draw one row as a line of text.
fn draw_row(row: &Row, options: &TreeOptions) -> String {
    let mut line = format!("{:>3} {}", row.row_id, "  ".repeat(row.indent as usize));
    line.push_str(match row.affordance() {
        Affordance::Expand => "▶ ",
        Affordance::Collapse => "▼ ",
        Affordance::None => "",
    });
    line.push_str(&row.text);

    if options.enable_links
        && let Some(href) = &row.href
    {
        line.push_str(&format!(" <{}>", href));
    }
    if options.show_tags {
        for tag in &row.tags {
            line.push_str(&format!(" [{}]", tag));
        }
    }
    if row.is_active {
        line.push_str(" (active)");
    }
    if row.is_selected {
        line.push_str(" *");
    }
    line
}

fn draw(tree: &Tree, out: &mut impl Write) -> io::Result<()> {
    for row in tree.rows() {
        writeln!(out, "{}", draw_row(row, tree.options()))?;
    }
    Ok(())
}

/// Run one command line. Returns `false` when the session should end.
fn command(tree: &mut Tree, line: &str, out: &mut impl Write) -> Result<bool, CliError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(true);
    };

    match name {
        "quit" | "exit" => return Ok(false),
        "remove" => tree.remove(),
        "location" => tree.set_location(words.next().map(str::to_string)),
        method => {
            let row_id = words
                .next()
                .and_then(|word| word.parse::<usize>().ok())
                .ok_or_else(|| CliError::Usage(format!("{} needs a row id", method)))?;
            let outcome = tree.invoke(row_id, method)?;
            if let Some(href) = outcome.follow_link {
                writeln!(out, "-> {}", href)?;
            }
        }
    }

    draw(tree, out)?;
    Ok(true)
}

fn run() -> Result<(), CliError> {
    let args = Args::parse(std::env::args().skip(1))?;
    let json = fs::read_to_string(&args.data)?;
    let mut tree = Tree::from_json(&json, args.options)?;

    tree.subscribe(|event| {
        if let TreeEvent::NodeSelected(node) = event {
            println!("selected: {}", node.text());
        }
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    draw(&tree, &mut out)?;

    for line in io::stdin().lock().lines() {
        match command(&mut tree, &line?, &mut out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => writeln!(out, "error: {}", e)?,
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let log_file = File::create("treeview-cli.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treeview::NodeData;

    fn tree() -> Tree {
        let data = vec![
            NodeData::new("Parent")
                .href("/parent")
                .tag("2")
                .child(NodeData::new("Child")),
            NodeData::new("Leaf"),
        ];
        Tree::new(&data, TreeOptions::default())
    }

    fn args(list: &[&str]) -> Result<Args, CliError> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_args() {
        let args = args(&["data.json", "--levels", "3", "--links", "--location", "/a"]).unwrap();
        assert_eq!(args.data, "data.json");
        assert_eq!(args.options.levels, 3);
        assert!(args.options.enable_links);
        assert_eq!(args.options.location.as_deref(), Some("/a"));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(matches!(args(&[]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "--levels"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "--levels", "x"]), Err(CliError::Usage(_))));
        assert!(matches!(args(&["a.json", "b.json"]), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_draw_rows() {
        let tree = tree();
        let mut out = Vec::new();
        draw(&tree, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "  0 ▶ Parent\n  1   Leaf\n");
    }

    #[test]
    fn test_draw_row_decorations() {
        let options = TreeOptions::new().enable_links(true).show_tags(true);
        let mut tree = tree();
        tree.select(0).unwrap();
        let line = draw_row(&tree.rows()[0], &options);
        assert_eq!(line, "  0 ▶ Parent </parent> [2] *");
    }

    #[test]
    fn test_commands() {
        let mut tree = tree();
        let mut out = Vec::new();

        assert!(command(&mut tree, "toggle 0", &mut out).unwrap());
        assert_eq!(tree.rows().len(), 3);
        assert!(command(&mut tree, "", &mut out).unwrap());
        assert!(matches!(
            command(&mut tree, "select", &mut out),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            command(&mut tree, "fold 0", &mut out),
            Err(CliError::Tree(TreeError::InvalidMethod(_)))
        ));
        assert!(!command(&mut tree, "quit", &mut out).unwrap());
    }
}
