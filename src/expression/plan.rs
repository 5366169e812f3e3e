//! Plan rendering.
//!
//! Expressions describe themselves by appending text to a [`PlanSink`]. The
//! output is used for EXPLAIN-style diagnostics only and never feeds back into
//! evaluation.

/// Append-only text sink for plan rendering
pub trait PlanSink {
    fn put_str(&mut self, value: &str);

    fn put_char(&mut self, value: char) {
        let mut buf = [0u8; 4];
        self.put_str(value.encode_utf8(&mut buf));
    }

    fn put_i64(&mut self, value: i64) {
        self.put_str(&value.to_string());
    }
}

/// Anything that can render itself into a plan
pub trait Plannable {
    fn to_plan(&self, sink: &mut dyn PlanSink);
}

/// Chaining helpers, usable from any `&mut dyn PlanSink`
impl<'a> dyn PlanSink + 'a {
    /// Append the rendered plan of another node
    pub fn val_plan<P: Plannable + ?Sized>(&mut self, plan: &P) -> &mut Self {
        plan.to_plan(self);
        self
    }

    pub fn val_str(&mut self, value: &str) -> &mut Self {
        self.put_str(value);
        self
    }

    pub fn val_char(&mut self, value: char) -> &mut Self {
        self.put_char(value);
        self
    }

    pub fn val_i64(&mut self, value: i64) -> &mut Self {
        self.put_i64(value);
        self
    }
}

/// Plan sink that accumulates into a `String`
#[derive(Debug, Default, Clone)]
pub struct TextPlanSink {
    text: String,
}

impl TextPlanSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl PlanSink for TextPlanSink {
    fn put_str(&mut self, value: &str) {
        self.text.push_str(value);
    }

    fn put_char(&mut self, value: char) {
        self.text.push(value);
    }
}

/// Render a node into a fresh string
pub fn plan_text<P: Plannable + ?Sized>(plan: &P) -> String {
    let mut sink = TextPlanSink::new();
    plan.to_plan(&mut sink);
    sink.into_text()
}
