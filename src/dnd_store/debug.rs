use super::DndStore;

impl<Meta> DndStore<Meta> {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_event_log_capacity.clamp(1, 10_000);
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        let prefix = match self.session.active_id() {
            Some(session) => format!("[drag {session}]"),
            None => "[idle]".to_owned(),
        };
        self.debug_log.push_back(format!("{prefix} {message}"));
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }

    pub fn debug_log_lines(&self) -> impl Iterator<Item = &str> {
        self.debug_log.iter().map(String::as_str)
    }

    /// The whole debug event log, one event per line, oldest first.
    pub fn debug_log_text(&self) -> String {
        let mut out = String::new();
        for line in &self.debug_log {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
