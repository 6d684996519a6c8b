//! Line-oriented front end: stdout rendering and a stdin command loop.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use hierarchy_nav::app::HierarchyNavigator;
use hierarchy_nav::kernel::services::ports::Frontend;
use hierarchy_nav::kernel::services::EventBusReceiver;
use hierarchy_nav::kernel::{ContextAction, HierarchyEvent};
use hierarchy_nav::models::NodeId;
use hierarchy_nav::views::{
    render_ancestor_selector, render_children_tabs, HierarchyView, SelectorOption, TabItem,
};

use crate::cli::{self, Command, TabRef};

pub struct StdoutView;

impl HierarchyView for StdoutView {
    fn render_selector(&mut self, options: Vec<SelectorOption>) {
        println!("{}", format_selector(&options));
    }

    fn render_tabs(&mut self, tabs: Vec<TabItem>) {
        print_tabs(&tabs);
    }
}

fn format_selector(options: &[SelectorOption]) -> String {
    let mut line = String::from("@");
    for option in options {
        line.push(' ');
        if option.active {
            line.push('[');
            line.push_str(&option.label);
            line.push(']');
        } else {
            line.push_str(&option.label);
        }
    }
    line
}

fn print_tabs(tabs: &[TabItem]) {
    if tabs.is_empty() {
        println!("  (no children)");
    }
    for (index, tab) in tabs.iter().enumerate() {
        let current = if tab.current { '>' } else { ' ' };
        let marked = if tab.selected { '+' } else { ' ' };
        let suffix = if tab.navigable { "/" } else { "" };
        println!("{current}{marked}{index:>3}  {}{suffix}", tab.label);
    }
}

/// Confirms on stdin, reports on stderr and saves downloads to a directory.
pub struct TerminalFrontend {
    download_dir: PathBuf,
}

impl TerminalFrontend {
    pub fn new(download_dir: PathBuf) -> Self {
        Self { download_dir }
    }
}

impl Frontend for TerminalFrontend {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim(), "y" | "Y" | "yes")
    }

    fn report_error(&mut self, message: &str) {
        eprintln!("error: {message}");
        eprintln!("(type `dismiss` to continue)");
    }

    fn download(&mut self, file_name: &str, content: &str) {
        let path = self.download_dir.join(file_name);
        match std::fs::write(&path, content) {
            Ok(()) => println!("saved {}", path.display()),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "download failed");
                eprintln!("error: cannot write {}: {e}", path.display());
            }
        }
    }
}

pub struct Shell {
    nav: HierarchyNavigator,
    events: EventBusReceiver,
    timeout: Duration,
}

impl Shell {
    pub fn new(nav: HierarchyNavigator, events: EventBusReceiver, timeout: Duration) -> Self {
        Self {
            nav,
            events,
            timeout,
        }
    }

    pub fn run(&mut self, root_path: String) -> io::Result<()> {
        self.nav.update(root_path);
        report(self.settle());

        let stdin = io::stdin();
        loop {
            print!("hnav> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }
            match cli::parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => report(self.execute(command)),
                Err(msg) => eprintln!("{msg}"),
            }
            report(self.settle());
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<(), String> {
        tracing::debug!(?command, "shell command");
        match command {
            Command::List => {
                let state = self.nav.state();
                println!("{}", format_selector(&render_ancestor_selector(state)));
                print_tabs(&render_children_tabs(state));
            }
            Command::Cd(tab) => {
                let node = self.resolve(&tab)?;
                if !self.nav.descend(node) {
                    return Err(format!("cannot enter {}", self.title_of(node)));
                }
            }
            Command::Up(index) => {
                let index = self.ancestor_index(index)?;
                self.nav.selector_changed(index);
            }
            Command::Select(tab) => {
                let node = self.resolve(&tab)?;
                self.nav.select(node, false);
            }
            Command::Mark(tab) => {
                let node = self.resolve(&tab)?;
                self.nav.select(node, true);
            }
            Command::Delete(tab) => {
                let node = self.resolve(&tab)?;
                self.nav.context_action(node, ContextAction::Delete);
            }
            Command::Export(tab) => {
                let node = match tab {
                    Some(tab) => self.resolve(&tab)?,
                    None => self
                        .nav
                        .state()
                        .current_children()
                        .first()
                        .copied()
                        .ok_or_else(|| "nothing to export here".to_string())?,
                };
                self.nav.context_action(node, ContextAction::Export);
            }
            Command::Reload => {
                self.nav.reload();
            }
            Command::Dismiss => {
                if !self.nav.dismiss_error() {
                    return Err("no error to dismiss".to_string());
                }
            }
            Command::Help => println!("{}", cli::HELP),
            Command::Quit => {}
        }
        Ok(())
    }

    /// Selector index for `up`; without an index, the parent of the current node.
    fn ancestor_index(&self, index: Option<usize>) -> Result<usize, String> {
        let depth = render_ancestor_selector(self.nav.state()).len();
        let target = match index {
            Some(index) => Some(index),
            None => depth.checked_sub(2),
        };
        target
            .filter(|&index| index < depth)
            .ok_or_else(|| "no such ancestor".to_string())
    }

    /// Waits for outstanding requests and relays bus events; a
    /// `hierarchy-changed` event triggers one reload per batch of events.
    fn settle(&mut self) -> Result<(), String> {
        loop {
            while self.nav.in_flight() > 0 {
                let before = self.nav.in_flight();
                self.nav.pump_blocking(self.timeout);
                if self.nav.in_flight() == before {
                    tracing::warn!(in_flight = before, "gave up waiting");
                    return Err("error: no reply from the server".to_string());
                }
            }

            let mut reload = false;
            for event in self.events.drain() {
                print_event(&event);
                reload |= event == HierarchyEvent::HierarchyChanged;
            }
            if !reload {
                return Ok(());
            }
            self.nav.reload();
        }
    }

    fn resolve(&self, tab: &TabRef) -> Result<NodeId, String> {
        let state = self.nav.state();
        let node = match tab {
            TabRef::Index(index) => state.current_children().get(*index).copied(),
            TabRef::Name(name) => state
                .nav
                .current_node
                .and_then(|current| state.tree.child_by_name(current, name)),
        };
        node.ok_or_else(|| format!("no tab {}", describe(tab)))
    }

    fn title_of(&self, node: NodeId) -> String {
        self.nav
            .state()
            .tree
            .name(node)
            .unwrap_or_default()
            .to_string()
    }
}

fn report(outcome: Result<(), String>) {
    if let Err(msg) = outcome {
        eprintln!("{msg}");
    }
}

fn describe(tab: &TabRef) -> String {
    match tab {
        TabRef::Index(index) => index.to_string(),
        TabRef::Name(name) => format!("{name:?}"),
    }
}

fn print_event(event: &HierarchyEvent) {
    match serde_json::to_string(event) {
        Ok(json) => println!("event {json}"),
        Err(e) => tracing::warn!(event = event.name(), error = %e, "cannot encode event"),
    }
}

#[cfg(test)]
#[path = "../tests/unit/shell.rs"]
mod tests;
