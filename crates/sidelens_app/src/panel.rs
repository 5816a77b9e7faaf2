use sidelens_core::RenderCommand;

/// Fixed display regions of the terminal panel. The render layer decides all
/// content; this type only holds it and redraws.
#[derive(Debug, Default)]
pub struct TerminalPanel {
    loading_visible: bool,
    results_visible: bool,
    heading: String,
    percentage: String,
    brief_info: String,
    reasoning: String,
    source_links: Vec<String>,
    sources_message: Option<String>,
    error_line: Option<String>,
}

impl TerminalPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prominent notice outside the result regions.
    pub fn notice(&self, message: &str) {
        eprintln!("*** {message}");
    }

    pub fn apply_all(&mut self, commands: &[RenderCommand]) {
        for command in commands {
            self.apply(command);
        }
        self.draw();
    }

    fn apply(&mut self, command: &RenderCommand) {
        match command {
            RenderCommand::SetLoadingVisible(visible) => self.loading_visible = *visible,
            RenderCommand::SetResultsVisible(visible) => self.results_visible = *visible,
            RenderCommand::ClearRegions => {
                self.heading.clear();
                self.percentage.clear();
                self.brief_info.clear();
                self.reasoning.clear();
                self.source_links.clear();
                self.sources_message = None;
                self.error_line = None;
            }
            RenderCommand::SetHeading(text) => self.heading = text.clone(),
            RenderCommand::SetPercentage(text) => self.percentage = text.clone(),
            RenderCommand::SetBriefInfo(text) => self.brief_info = text.clone(),
            RenderCommand::SetReasoning(text) => self.reasoning = text.clone(),
            RenderCommand::SetSourceLinks(links) => {
                self.source_links = links.clone();
                self.sources_message = None;
            }
            RenderCommand::SetSourcesMessage(message) => {
                self.source_links.clear();
                self.sources_message = Some(message.clone());
            }
            RenderCommand::SetErrorLine(line) => self.error_line = Some(line.clone()),
        }
    }

    fn draw(&self) {
        println!("----------------------------------------");
        if self.loading_visible {
            println!("Analyzing...");
        }
        if self.results_visible {
            println!("{}  [{}]", self.heading, self.percentage);
            if !self.brief_info.is_empty() {
                println!("{}", self.brief_info);
            }
            if !self.reasoning.is_empty() {
                println!("{}", self.reasoning);
            }
            if let Some(message) = &self.sources_message {
                println!("{message}");
            } else if !self.source_links.is_empty() {
                println!("Sources:");
                for link in &self.source_links {
                    println!("  - {link}");
                }
            }
        }
        if let Some(error) = &self.error_line {
            println!("{error}");
        }
        println!("----------------------------------------");
    }
}
