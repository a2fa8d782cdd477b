use std::fmt;

/// Positional placeholder consumed by [`Message::render`].
const PLACEHOLDER: char = '?';

/// Deferred display form of a single substitution value.
///
/// The wrapped closure runs only when the owning [`Message`] renders, so a
/// passing assertion never stringifies its arguments.
pub struct Arg<'a> {
    render: Box<dyn Fn() -> String + 'a>,
}

impl<'a> Arg<'a> {
    /// Defers a value rendered through its `Debug` form.
    pub fn debug<T>(value: &'a T) -> Self
    where
        T: fmt::Debug + ?Sized,
    {
        Self::from_fn(move || format!("{value:?}"))
    }

    /// Defers a value rendered through its `Display` form.
    pub fn display<T>(value: &'a T) -> Self
    where
        T: fmt::Display + ?Sized,
    {
        Self::from_fn(move || value.to_string())
    }

    /// Defers an arbitrary rendering closure.
    pub fn from_fn(render: impl Fn() -> String + 'a) -> Self {
        Self {
            render: Box::new(render),
        }
    }

    fn resolve(&self) -> String {
        (self.render)()
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Arg(..)")
    }
}

/// Lazily rendered failure message.
///
/// Carries the caller override, the template, and the unevaluated
/// substitution arguments until a sink decides it needs the text.
#[derive(Debug)]
pub struct Message<'a> {
    override_message: &'a str,
    template: &'a str,
    args: Vec<Arg<'a>>,
}

impl<'a> Message<'a> {
    pub fn build(override_message: &'a str, template: &'a str, args: Vec<Arg<'a>>) -> Self {
        Self {
            override_message,
            template,
            args,
        }
    }

    /// Renders the final text.
    ///
    /// A non-empty override is returned verbatim without evaluating any
    /// argument. Otherwise every `?` in the template is replaced, left to
    /// right, by the next argument in order; markers beyond the argument
    /// count stay literal and surplus arguments are ignored. Substituted
    /// text is never rescanned, so a `?` inside an argument's rendering
    /// stays as is.
    pub fn render(&self) -> String {
        if !self.override_message.is_empty() {
            return self.override_message.to_string();
        }
        let mut out = String::with_capacity(self.template.len());
        let mut args = self.args.iter();
        for ch in self.template.chars() {
            match ch {
                PLACEHOLDER => match args.next() {
                    Some(arg) => out.push_str(&arg.resolve()),
                    None => out.push(ch),
                },
                _ => out.push(ch),
            }
        }
        out
    }
}

impl fmt::Display for Message<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
