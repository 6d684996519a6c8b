//! Command-line and shell command parsing for `hnav`.

use std::path::PathBuf;

pub const USAGE: &str = "\
usage: hnav [--server URL] [--config FILE] [--snapshot FILE] [ROOT_PATH]

  --server URL     hierarchy server, overrides the settings file
  --config FILE    settings file (default: per-user settings.json)
  --snapshot FILE  browse a hierarchy JSON file instead of a server
  ROOT_PATH        hierarchy path to load (default: /)";

pub const HELP: &str = "\
commands:
  ls                 list the children of the current node
  cd TAB | ..        descend into a tab, or go up one level
  up [INDEX]         jump to an ancestor (default: parent)
  select TAB         make TAB the active graph
  mark TAB           toggle TAB in the multi-selection
  delete TAB         remove TAB and its subtree on the server
  export [TAB]       download kappa for the marked tabs
  reload             fetch the hierarchy again
  dismiss            clear the current error
  help               show this text
  quit               leave
TAB is a tab number from `ls` or a node name.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliArgs {
    pub server: Option<String>,
    pub config: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub root_path: String,
    pub help: bool,
}

pub fn parse_args<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs {
        root_path: "/".to_string(),
        ..CliArgs::default()
    };
    let mut root_path = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => out.help = true,
            "--server" => out.server = Some(value_of(&arg, args.next())?),
            "--config" => out.config = Some(PathBuf::from(value_of(&arg, args.next())?)),
            "--snapshot" => out.snapshot = Some(PathBuf::from(value_of(&arg, args.next())?)),
            flag if flag.starts_with("--") => return Err(format!("unknown option {flag}")),
            _ if root_path.is_some() => return Err(format!("unexpected argument {arg}")),
            _ => root_path = Some(arg),
        }
    }
    if let Some(root_path) = root_path {
        out.root_path = root_path;
    }
    Ok(out)
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, String> {
    value.ok_or_else(|| format!("{flag} needs a value"))
}

/// A tab reference typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabRef {
    Index(usize),
    Name(String),
}

impl TabRef {
    fn parse(arg: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(index) => TabRef::Index(index),
            Err(_) => TabRef::Name(arg.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Cd(TabRef),
    Up(Option<usize>),
    Select(TabRef),
    Mark(TabRef),
    Delete(TabRef),
    Export(Option<TabRef>),
    Reload,
    Dismiss,
    Help,
    Quit,
}

/// Parses one shell line; `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();
    if words.next().is_some() {
        return Err(format!("too many arguments for {name}"));
    }

    let tab = |arg: Option<&str>| {
        arg.map(TabRef::parse)
            .ok_or_else(|| format!("{name} needs a tab"))
    };
    let command = match name {
        "ls" => Command::List,
        "cd" if arg == Some("..") => Command::Up(None),
        "cd" => Command::Cd(tab(arg)?),
        "up" => match arg {
            None => Command::Up(None),
            Some(index) => Command::Up(Some(
                index
                    .parse()
                    .map_err(|_| format!("not an ancestor index: {index}"))?,
            )),
        },
        "select" => Command::Select(tab(arg)?),
        "mark" => Command::Mark(tab(arg)?),
        "delete" | "rm" => Command::Delete(tab(arg)?),
        "export" => Command::Export(arg.map(TabRef::parse)),
        "reload" => Command::Reload,
        "dismiss" => Command::Dismiss,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command {other}, try help")),
    };
    Ok(Some(command))
}

#[cfg(test)]
#[path = "../tests/unit/cli.rs"]
mod tests;
