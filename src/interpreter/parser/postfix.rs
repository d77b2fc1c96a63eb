use crate::ast::Term;

/// Reorders infix terms into postfix (Reverse Polish) order.
///
/// Numbers go straight to the output. An incoming operator first moves every
/// stacked operator of greater or equal precedence to the output, which keeps
/// equal-precedence operators left-associative, and is then stacked itself.
/// Leftover operators are emitted last. There is no bracket handling: the
/// grammar has no grouping.
///
/// # Parameters
/// - `terms`: Alternating infix terms.
///
/// # Returns
/// The same terms in postfix order.
#[must_use]
pub fn to_postfix(terms: Vec<Term>) -> Vec<Term> {
    let mut output = Vec::with_capacity(terms.len());
    let mut operators: Vec<Term> = Vec::new();

    for term in terms {
        match term {
            Term::Number(_) => output.push(term),
            Term::Operator { op, .. } => {
                while let Some(&Term::Operator { op: top, .. }) = operators.last()
                      && top.precedence() >= op.precedence()
                {
                    output.extend(operators.pop());
                }
                operators.push(term);
            },
        }
    }
    output.extend(operators.into_iter().rev());
    output
}

/// Renders terms separated by single spaces.
#[must_use]
pub fn render_postfix(terms: &[Term]) -> String {
    terms.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
