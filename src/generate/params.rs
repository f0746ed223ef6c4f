//! Parameter benchmark emitter: a recursive IFJ17 function taking many
//! parameters, called with random values and checked against the result
//! computed here.

use std::fmt;
use std::io::Write;

use super::GenerateError;
use crate::ports::RandomSource;

/// Words a parameter may not be named after. `n` is the recursion counter.
pub const RESERVED: &[&str] = &[
    "as", "asc", "declare", "dim", "do", "else", "end", "chr", "function", "if", "input",
    "length", "loop", "print", "return", "scope", "substr", "then", "while", "and", "continue",
    "elseif", "exit", "false", "for", "next", "not", "or", "shared", "static", "true", "integer",
    "double", "boolean", "string", "n",
];

/// Redraws allowed before giving up on an overflowing expression.
pub const MAX_ATTEMPTS: u32 = 64;

/// Largest value passed for a parameter.
pub const MAX_VALUE: u32 = 15;

const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Parameters of a generated benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamsConfig {
    /// Number of function parameters besides `n`.
    pub count: usize,
}

impl Default for ParamsConfig {
    fn default() -> Self {
        Self { count: 50 }
    }
}

/// Declared type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// `integer`
    Integer,
    /// `double`
    Double,
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Integer => "integer",
            Self::Double => "double",
        })
    }
}

/// Binary operator joining two adjacent parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
        })
    }
}

/// A fully drawn benchmark, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    /// Parameter names with their declared types.
    pub params: Vec<(String, ParamType)>,
    /// `params.len() - 1` operators; `operators[i]` sits between parameter `i` and `i + 1`.
    pub operators: Vec<Operator>,
    /// Value passed for each parameter.
    pub values: Vec<u32>,
    /// Value of the expression under `values`.
    pub expected: i64,
}

impl Benchmark {
    /// The return expression, e.g. `a + b * c`.
    #[must_use]
    pub fn expression(&self) -> String {
        let mut expression = String::new();
        for (i, (name, _)) in self.params.iter().enumerate() {
            if i > 0 {
                expression.push_str(&format!(" {} ", self.operators[i - 1]));
            }
            expression.push_str(name);
        }
        expression
    }

    /// Render the benchmark program.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let header = join(self.params.iter().map(|(name, ty)| format!("{name} AS {ty}")));
        let names = join(self.params.iter().map(|(name, _)| name.clone()));
        let values = join(self.values.iter().map(ToString::to_string));

        writeln!(out, "' big count of function parameters")?;
        writeln!(out)?;
        writeln!(out, "function testing(n as integer, {header}) as integer")?;
        writeln!(out, "    dim res as integer")?;
        writeln!(out, "    if n > 0 then")?;
        writeln!(out, "        n = n - 1")?;
        writeln!(out, "        res = testing(n, {names})")?;
        writeln!(out, "        return res")?;
        writeln!(out, "    else")?;
        writeln!(out, "        return {}", self.expression())?;
        writeln!(out, "    end if")?;
        writeln!(out, "end function")?;
        writeln!(out)?;
        writeln!(out, "scope")?;
        writeln!(out, "    dim res as integer")?;
        writeln!(out, "    res = testing(10, {values})")?;
        writeln!(out, "    if res = {} then", self.expected)?;
        writeln!(out, "        print !\"OK\";")?;
        writeln!(out, "    else")?;
        writeln!(out, "        print !\"NONOK\";")?;
        writeln!(out, "    end if")?;
        writeln!(out, "end scope")?;
        out.flush()
    }
}

fn join(items: impl Iterator<Item = String>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

/// The first `count` lowercase names, shortest first then alphabetical,
/// skipping [`RESERVED`] words.
#[must_use]
pub fn parameter_names(count: usize) -> Vec<String> {
    let mut names = Vec::with_capacity(count);
    let mut length = 1;
    while names.len() < count {
        let mut indices = vec![0usize; length];
        loop {
            let name: String = indices.iter().map(|&i| char::from(LOWERCASE[i])).collect();
            if !RESERVED.contains(&name.as_str()) {
                names.push(name);
                if names.len() == count {
                    return names;
                }
            }
            if !advance(&mut indices) {
                break;
            }
        }
        length += 1;
    }
    names
}

/// Step a base-26 odometer; false once it wraps around.
fn advance(indices: &mut [usize]) -> bool {
    for slot in indices.iter_mut().rev() {
        *slot += 1;
        if *slot < LOWERCASE.len() {
            return true;
        }
        *slot = 0;
    }
    false
}

/// Evaluate `values` joined by `operators`, `*` binding tighter than
/// left-associative `+` and `-`. `None` on overflow.
#[must_use]
pub fn evaluate(values: &[u32], operators: &[Operator]) -> Option<i64> {
    let (&first, rest) = values.split_first()?;
    let mut total: i64 = 0;
    let mut pending = Operator::Add;
    let mut term = i64::from(first);

    for (&op, &value) in operators.iter().zip(rest) {
        let value = i64::from(value);
        if op == Operator::Mul {
            term = term.checked_mul(value)?;
        } else {
            total = apply(total, pending, term)?;
            pending = op;
            term = value;
        }
    }
    apply(total, pending, term)
}

fn apply(total: i64, op: Operator, term: i64) -> Option<i64> {
    match op {
        Operator::Sub => total.checked_sub(term),
        Operator::Add | Operator::Mul => total.checked_add(term),
    }
}

/// Draw a benchmark.
///
/// Draw order: one type per parameter, then per attempt one operator per
/// gap followed by one value per parameter. Attempts repeat while the
/// expected result overflows.
///
/// # Errors
///
/// Returns an error if the config is invalid or every attempt overflows.
pub fn generate_benchmark(
    random: &dyn RandomSource,
    config: &ParamsConfig,
) -> Result<Benchmark, GenerateError> {
    if config.count == 0 {
        return Err(GenerateError::InvalidConfig("count must be at least 1".into()));
    }

    let params: Vec<(String, ParamType)> = parameter_names(config.count)
        .into_iter()
        .map(|name| {
            let ty = if random.draw(0, 1) == 0 { ParamType::Integer } else { ParamType::Double };
            (name, ty)
        })
        .collect();

    for attempt in 1..=MAX_ATTEMPTS {
        let operators: Vec<Operator> = (1..config.count)
            .map(|_| match random.draw(0, 2) {
                0 => Operator::Add,
                1 => Operator::Sub,
                _ => Operator::Mul,
            })
            .collect();
        let values: Vec<u32> = (0..config.count).map(|_| random.draw(0, MAX_VALUE)).collect();

        if let Some(expected) = evaluate(&values, &operators) {
            return Ok(Benchmark { params, operators, values, expected });
        }
        tracing::debug!(attempt, "benchmark expression overflowed, redrawing");
    }

    Err(GenerateError::Overflow { attempts: MAX_ATTEMPTS })
}

/// Draw a benchmark, write it to `out`, and return it.
///
/// # Errors
///
/// Returns an error if generation or writing fails.
pub fn emit_params<W: Write>(
    random: &dyn RandomSource,
    config: &ParamsConfig,
    out: &mut W,
) -> Result<Benchmark, GenerateError> {
    let benchmark = generate_benchmark(random, config)?;
    benchmark.write_to(out)?;
    Ok(benchmark)
}
