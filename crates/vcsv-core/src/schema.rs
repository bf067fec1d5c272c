//! Signal/parameter schema resolution
//!
//! Classifies each semicolon-delimited token of the signal-declaration line
//! up front as either a parameterized instance (`Name (p1=v1|p2=v2)`) or a
//! bare name, then resolves the file-wide schema: a parameter sweep of one
//! signal, or a flat list of independently named signals.

use crate::types::{Result, SignalDeclaration, VcsvError};
use regex::Regex;
use tracing::debug;

/// One token of the signal-declaration line, classified at parse time
#[derive(Debug, Clone, PartialEq)]
pub enum SignalToken {
    /// `<name> (<p1=v1|p2=v2|...>)`
    Named {
        name: String,
        params: Vec<(String, String)>,
    },
    /// Anything that does not match the parameterized form
    Bare { name: String },
}

/// The resolved schema shape of the whole file
#[derive(Debug, Clone, PartialEq)]
pub enum SignalSchema {
    /// Flat list of independently named signals, first-seen order, deduplicated
    Bare { names: Vec<String> },
    /// Parameter sweep of a single signal
    Parameterized {
        name: String,
        /// Ordered parameter-name schema shared by every instance
        param_names: Vec<String>,
    },
}

impl SignalSchema {
    /// Number of distinct signal names (drives the axis-shape classification)
    pub fn num_signals(&self) -> usize {
        match self {
            SignalSchema::Bare { names } => names.len(),
            SignalSchema::Parameterized { .. } => 1,
        }
    }
}

/// Signal declarations plus the schema they resolve to
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSignals {
    /// Declarations retained for the metadata record. In parameterized mode
    /// only the matching tokens; in bare mode the raw token list.
    pub declarations: Vec<SignalDeclaration>,
    pub schema: SignalSchema,
}

/// Classify a single declaration token.
fn parse_token(pattern: &Regex, token: &str) -> Result<SignalToken> {
    let Some(caps) = pattern.captures(token) else {
        return Ok(SignalToken::Bare {
            name: token.to_string(),
        });
    };

    let name = caps[1].to_string();
    let mut params = Vec::new();
    for piece in caps[2].split('|') {
        let Some((key, value)) = piece.split_once('=') else {
            return Err(VcsvError::Parse(format!(
                "malformed parameter assignment '{}' in signal '{}': missing '='",
                piece, name
            )));
        };
        params.push((key.to_string(), value.to_string()));
    }

    Ok(SignalToken::Named { name, params })
}

/// Resolve the semicolon-delimited signal-declaration line.
///
/// If no token matches the parameterized form the raw token list degrades to
/// bare signal names (valid, not an error). Otherwise every matching token
/// must share an identical ordered parameter-name list, and only one
/// distinct signal name is supported.
pub fn resolve_signals(signal_line: &str) -> Result<ResolvedSignals> {
    // Prefix match: trailing text after the closing parenthesis is ignored
    let pattern = Regex::new(r"^(\w+)\s\(([^)]+)\)").unwrap();

    let tokens: Vec<(String, SignalToken)> = signal_line
        .split(';')
        .map(|raw| Ok((raw.to_string(), parse_token(&pattern, raw)?)))
        .collect::<Result<_>>()?;

    let named: Vec<SignalDeclaration> = tokens
        .iter()
        .filter_map(|(_, token)| match token {
            SignalToken::Named { name, params } => Some(SignalDeclaration {
                name: name.clone(),
                parameters: params.clone(),
            }),
            SignalToken::Bare { .. } => None,
        })
        .collect();

    if named.is_empty() {
        // Bare mode: the raw token list is the signal-name list
        let declarations: Vec<SignalDeclaration> = tokens
            .into_iter()
            .map(|(raw, _)| SignalDeclaration {
                name: raw,
                parameters: Vec::new(),
            })
            .collect();
        let names = dedup_names(declarations.iter().map(|d| d.name.as_str()));

        debug!(signals = names.len(), "Resolved bare signal schema");
        return Ok(ResolvedSignals {
            declarations,
            schema: SignalSchema::Bare { names },
        });
    }

    let param_names: Vec<String> = named[0]
        .param_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    for decl in &named[1..] {
        if decl.param_names() != param_names {
            return Err(VcsvError::Schema(format!(
                "signal parameters do not match: '{}' declares {:?}, expected {:?}",
                decl.name,
                decl.param_names(),
                param_names
            )));
        }
    }

    let unique_names = dedup_names(named.iter().map(|d| d.name.as_str()));
    if unique_names.len() > 1 {
        return Err(VcsvError::Schema(format!(
            "multiple signals not supported in parameterized mode: {:?}",
            unique_names
        )));
    }

    debug!(
        signal = %unique_names[0],
        params = ?param_names,
        instances = named.len(),
        "Resolved parameterized signal schema"
    );

    Ok(ResolvedSignals {
        declarations: named,
        schema: SignalSchema::Parameterized {
            name: unique_names[0].clone(),
            param_names,
        },
    })
}

/// First-seen-order deduplication of signal names
fn dedup_names<'a>(names: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for name in names {
        if !unique.iter().any(|n| n == name) {
            unique.push(name.to_string());
        }
    }
    unique
}
