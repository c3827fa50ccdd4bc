// Copyright 2025 Cowboy AI, LLC.

//! Example runner
//!
//! The runner executes its demonstrations one after another in tour order.
//! Each demonstration writes to the shared [`Console`] and may leave tasks
//! running in the background; those are handed back in the [`RunReport`].

use crate::config::TourConfig;
use crate::console::Console;
use crate::errors::TourResult;
use crate::pages::Page;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// A self-contained page of the tour
pub trait Demonstration: Send + Sync {
    /// Page this demonstration renders
    fn page(&self) -> Page;

    /// Print the page to the context's console
    fn run(&self, ctx: &mut PageContext<'_>) -> TourResult<()>;
}

/// Everything a demonstration can reach while it runs
pub struct PageContext<'a> {
    console: &'a Console,
    config: &'a TourConfig,
    background: Vec<JoinHandle<()>>,
}

impl<'a> PageContext<'a> {
    fn new(console: &'a Console, config: &'a TourConfig) -> Self {
        Self {
            console,
            config,
            background: Vec::new(),
        }
    }

    /// Print one line
    pub fn say(&self, line: impl Into<String>) {
        self.console.line(line);
    }

    /// Shared console, for tasks that print later
    pub fn console(&self) -> &Console {
        self.console
    }

    /// Active configuration
    pub fn config(&self) -> &TourConfig {
        self.config
    }

    /// Hand over a launched task; the runner does not wait for it
    pub fn background(&mut self, handle: JoinHandle<()>) {
        self.background.push(handle);
    }
}

/// Outcome of a run
#[derive(Debug)]
pub struct RunReport {
    /// Pages that ran, in order
    pub pages: Vec<Page>,
    background: Vec<JoinHandle<()>>,
}

impl RunReport {
    /// Number of launched tasks not yet awaited
    pub fn pending(&self) -> usize {
        self.background.len()
    }

    /// Wait for every launched task
    pub async fn finish(self) -> TourResult<()> {
        for handle in self.background {
            handle.await?;
        }
        Ok(())
    }
}

/// Runs demonstrations in order
pub struct ExampleRunner {
    config: TourConfig,
    demonstrations: Vec<Box<dyn Demonstration>>,
}

impl ExampleRunner {
    /// The standard tour, restricted to the configured pages
    ///
    /// Pages always run in tour order, whatever order the configuration
    /// lists them in.
    pub fn standard(config: TourConfig) -> Self {
        let demonstrations = Page::ALL
            .iter()
            .filter(|page| config.pages.contains(page))
            .map(|page| page.demonstration())
            .collect();
        Self {
            config,
            demonstrations,
        }
    }

    /// A runner over an explicit list of demonstrations
    pub fn with_demonstrations(
        config: TourConfig,
        demonstrations: Vec<Box<dyn Demonstration>>,
    ) -> Self {
        Self {
            config,
            demonstrations,
        }
    }

    /// Pages this runner will execute
    pub fn pages(&self) -> Vec<Page> {
        self.demonstrations.iter().map(|demo| demo.page()).collect()
    }

    /// Run every demonstration, printing a heading before each page
    pub fn run(&self, console: &Console) -> TourResult<RunReport> {
        let mut report = RunReport {
            pages: Vec::with_capacity(self.demonstrations.len()),
            background: Vec::new(),
        };

        for demonstration in &self.demonstrations {
            let page = demonstration.page();
            info!(page = %page.slug(), "Running page");

            console.line(format!("## {}", page.title()));
            let mut ctx = PageContext::new(console, &self.config);
            demonstration.run(&mut ctx)?;

            debug!(
                page = %page.slug(),
                background = ctx.background.len(),
                "Page finished"
            );
            report.background.append(&mut ctx.background);
            report.pages.push(page);
        }

        info!(
            pages = report.pages.len(),
            pending = report.pending(),
            "Tour complete"
        );
        Ok(report)
    }
}
