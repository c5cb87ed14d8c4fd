//! Quokka fullscreen scenario runner
//!
//! A headless harness for testing and debugging fullscreen transitions.
//! Runs a JSON scenario against a fresh document and prints the dispatched
//! event trace.
//!
//! Usage:
//!   quokka-cli <scenario.json>        Run a scenario file
//!   quokka-cli --scenario '<json>'    Run an inline JSON scenario
//!
//! A scenario builds a tree of named elements and then drives the
//! controller:
//!
//! ```json
//! {
//!   "tree": [
//!     { "id": "stage" },
//!     { "id": "panel", "parent": "stage" }
//!   ],
//!   "steps": [
//!     { "request": { "element": "panel" } },
//!     "pump",
//!     { "remove": { "element": "stage" } },
//!     "pump"
//!   ]
//! }
//! ```

use std::collections::HashMap;
use std::env;
use std::fs;

use anyhow::{Context as _, Result, bail};
use serde::Deserialize;

use quokka_dom::{ElementData, NodeId, NodeType};
use quokka_fullscreen::{
    DocumentId, EventDispatcher, EventTarget, FullscreenController, FullscreenEventKind,
    TransitionHandle,
};

/// A scripted fullscreen scenario: a tree of named elements plus the steps
/// to drive against it.
#[derive(Deserialize)]
struct Scenario {
    /// Elements to attach before the steps run, in order. Entries without
    /// a parent attach directly under the document.
    #[serde(default)]
    tree: Vec<TreeEntry>,
    /// Steps, executed in order.
    steps: Vec<Step>,
}

#[derive(Deserialize)]
struct TreeEntry {
    id: String,
    #[serde(default)]
    parent: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Step {
    /// Call `request_fullscreen` on a named element.
    Request {
        /// Name of the element to request fullscreen on.
        element: String,
    },
    /// Call `exit_fullscreen`.
    Exit,
    /// Detach a named element's subtree from the tree.
    Remove {
        /// Name of the element to remove.
        element: String,
    },
    /// One script-to-task-queue handoff: checkpoint, then drain.
    Pump,
}

/// Dispatcher that prints each event as it fires.
struct TraceDispatcher {
    names: HashMap<NodeId, String>,
}

impl TraceDispatcher {
    fn describe(&self, target: EventTarget) -> String {
        match target {
            EventTarget::Document => "document".to_string(),
            EventTarget::Element(id) => self
                .names
                .get(&id)
                .map_or_else(|| format!("node {}", id.0), |name| format!("#{name}")),
        }
    }
}

impl EventDispatcher for TraceDispatcher {
    fn dispatch(
        &mut self,
        _controller: &mut FullscreenController,
        _document: DocumentId,
        kind: FullscreenEventKind,
        target: EventTarget,
    ) {
        println!("  event {kind} -> {}", self.describe(target));
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let input = if args[1] == "--scenario" {
        if args.len() < 3 {
            eprintln!("Error: --scenario requires a JSON string argument");
            std::process::exit(1);
        }
        args[2].clone()
    } else {
        fs::read_to_string(&args[1]).with_context(|| format!("failed to read '{}'", args[1]))?
    };

    let scenario: Scenario = serde_json::from_str(&input).context("invalid scenario JSON")?;
    run_scenario(&scenario)
}

fn run_scenario(scenario: &Scenario) -> Result<()> {
    let mut controller = FullscreenController::new();
    let doc = controller.create_document();

    let mut elements: HashMap<String, NodeId> = HashMap::new();
    for entry in &scenario.tree {
        if elements.contains_key(&entry.id) {
            bail!("duplicate element id '{}'", entry.id);
        }
        let parent = match &entry.parent {
            Some(name) => *elements
                .get(name)
                .with_context(|| format!("unknown parent '{name}' for '{}'", entry.id))?,
            None => NodeId::ROOT,
        };
        let tree = controller
            .document_mut(doc)
            .context("document disappeared")?
            .tree_mut();
        let id = tree.alloc(NodeType::Element(ElementData::named(&entry.id)));
        tree.append_child(parent, id);
        let _ = elements.insert(entry.id.clone(), id);
    }

    let mut dispatcher = TraceDispatcher {
        names: elements.iter().map(|(name, &id)| (id, name.clone())).collect(),
    };
    let mut transitions: Vec<(String, TransitionHandle)> = Vec::new();

    for step in &scenario.steps {
        match step {
            Step::Request { element } => {
                let id = lookup(&elements, element)?;
                println!("request fullscreen #{element}");
                let handle = controller.request_fullscreen(doc, id);
                transitions.push((format!("request #{element}"), handle));
            }
            Step::Exit => {
                println!("exit fullscreen");
                let handle = controller.exit_fullscreen(doc);
                transitions.push(("exit".to_string(), handle));
            }
            Step::Remove { element } => {
                let id = lookup(&elements, element)?;
                println!("remove #{element}");
                controller.remove_element(doc, id);
            }
            Step::Pump => {
                println!("pump");
                controller.pump(&mut dispatcher);
            }
        }
        println!(
            "  fullscreen element: {}",
            match controller.fullscreen_element(doc) {
                Some(id) => dispatcher.describe(EventTarget::Element(id)),
                None => "(none)".to_string(),
            }
        );
    }

    println!("\n=== Transitions ===");
    for (label, mut handle) in transitions {
        let state = match handle.try_settled() {
            Some(Ok(())) => "resolved".to_string(),
            Some(Err(error)) => format!("rejected: {error}"),
            None => "pending".to_string(),
        };
        println!("{label}: {state}");
    }

    println!("\n=== Queue ===");
    println!("{} task(s) still pending", controller.pending_tasks());

    Ok(())
}

fn lookup(elements: &HashMap<String, NodeId>, name: &str) -> Result<NodeId> {
    elements
        .get(name)
        .copied()
        .with_context(|| format!("unknown element '{name}'"))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <scenario.json>");
    eprintln!("       {program} --scenario '<json>'");
}
