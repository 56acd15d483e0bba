use clap::ValueEnum;
use smallworld_core::{format_route, shared_properties, Card, ResolvedRoute, RouteIndex};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum QueryMode {
    Starters,
    Targets,
}

impl QueryMode {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "S" | "STARTER" | "STARTERS" => Some(Self::Starters),
            "T" | "TARGET" | "TARGETS" => Some(Self::Targets),
            _ => None,
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Self::Starters => "starter",
            Self::Targets => "target",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RouteFormat {
    pub width: usize,
    pub explain: bool,
}

impl RouteFormat {
    pub fn line(&self, route: &ResolvedRoute<'_>) -> String {
        let mut line = format_route(route, self.width);
        if self.explain {
            let first = shared_properties(route.starter, route.bridge);
            let second = shared_properties(route.bridge, route.target);
            line.push_str(&format!("\t[{first} / {second}]"));
        }
        line
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\n', '\r'][..]).to_string()))
    }

    fn prompt_mode(&mut self) -> io::Result<Option<QueryMode>> {
        writeln!(self.output, "Find routes by:\nS - Starters\nT - Targets")?;
        loop {
            let Some(line) = self.read_line("How do you want to find routes? (S/T, Q to quit): ")?
            else {
                return Ok(None);
            };
            if line.trim().eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            match QueryMode::parse(&line) {
                Some(mode) => return Ok(Some(mode)),
                None => writeln!(self.output, "invalid choice: {}", line.trim())?,
            }
        }
    }

    fn prompt_card<'a>(
        &mut self,
        index: &RouteIndex<'a>,
        mode: QueryMode,
    ) -> io::Result<Option<&'a Card>> {
        loop {
            let line = match self.read_line(&format!("Select {}: ", mode.noun()))? {
                Some(line) => line,
                None => return Ok(None),
            };
            let Ok(choice) = line.trim().parse::<usize>() else {
                writeln!(self.output, "expected a number, got {:?}", line.trim())?;
                continue;
            };
            let selected = match mode {
                QueryMode::Starters => index.select_starter(choice),
                QueryMode::Targets => index.select_target(choice),
            };
            match selected {
                Ok(card) => return Ok(Some(card)),
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}

pub fn print_choices<W: Write>(
    out: &mut W,
    index: &RouteIndex<'_>,
    mode: QueryMode,
    width: usize,
) -> io::Result<()> {
    let names = match mode {
        QueryMode::Starters => index.starter_names(),
        QueryMode::Targets => index.target_names(),
    };
    writeln!(out, "--- Possible {}s ---", mode.noun())?;
    for (idx, name) in names.iter().enumerate() {
        writeln!(out, "{idx} - {}", smallworld_core::pad_name(name, width))?;
    }
    Ok(())
}

pub fn routes_for<'a>(
    index: &RouteIndex<'a>,
    mode: QueryMode,
    card: &Card,
) -> Vec<ResolvedRoute<'a>> {
    match mode {
        QueryMode::Starters => index.routes_from(card.id),
        QueryMode::Targets => index.routes_to(card.id),
    }
}

pub fn print_routes<W: Write>(
    out: &mut W,
    routes: &[ResolvedRoute<'_>],
    format: RouteFormat,
) -> io::Result<()> {
    for route in routes {
        writeln!(out, "{}", format.line(route))?;
    }
    Ok(())
}

pub fn print_routes_json<W: Write>(out: &mut W, routes: &[ResolvedRoute<'_>]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, routes)?;
    writeln!(out)
}

/// Runs the S/T query loop until the user quits or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    index: &RouteIndex<'_>,
    format: RouteFormat,
) -> io::Result<()> {
    loop {
        let Some(mode) = prompter.prompt_mode()? else {
            return Ok(());
        };
        print_choices(prompter.output(), index, mode, format.width)?;
        let Some(card) = prompter.prompt_card(index, mode)? else {
            return Ok(());
        };
        writeln!(prompter.output(), "Your selection: {}", card.name)?;
        let routes = routes_for(index, mode, card);
        print_routes(prompter.output(), &routes, format)?;
        writeln!(prompter.output())?;
    }
}
