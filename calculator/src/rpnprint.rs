use crate::parser::{precedence, Assoc, RPNExpr};
use lexers::CalcToken;
use std::fmt;

#[derive(Debug, Clone)]
enum AST<'a> {
    Leaf(&'a str),
    Node(char, Box<AST<'a>>, Box<AST<'a>>),
}

impl RPNExpr {
    // None when the postfix sequence doesn't reduce to a single tree
    fn build_ast(&self) -> Option<AST> {
        let mut ops = Vec::new();
        for token in self.iter() {
            match *token {
                CalcToken::Number(ref x) => ops.push(AST::Leaf(x)),
                CalcToken::Op(op) => {
                    let rhs = ops.pop()?;
                    let lhs = ops.pop()?;
                    ops.push(AST::Node(op, Box::new(lhs), Box::new(rhs)));
                }
                CalcToken::Unknown(_) => return None,
            }
        }
        match ops.len() {
            1 => ops.pop(),
            _ => None,
        }
    }

    pub(crate) fn postfix_of(tokens: &[CalcToken]) -> String {
        tokens.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ")
    }

    /// The raw postfix sequence, eg: `2 3 4 * +`.
    pub fn postfix(&self) -> String {
        Self::postfix_of(self)
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn printer(root: &AST) -> (String, usize) {
            match *root {
                AST::Leaf(x) => (x.to_string(), usize::MAX),
                AST::Node(op, ref lhs, ref rhs) => {
                    let (lhs, rhs) = (printer(lhs), printer(rhs));
                    let (prec, assoc) = precedence(op);
                    let lh = if prec > lhs.1 {
                        format!("({})", lhs.0)
                    } else {
                        lhs.0
                    };
                    // equal precedence on the right must keep its grouping: 8 - (3 - 2)
                    let rh = if prec > rhs.1 || (prec == rhs.1 && assoc == Assoc::Left) {
                        format!("({})", rhs.0)
                    } else {
                        rhs.0
                    };
                    (format!("{} {} {}", lh, op, rh), prec)
                }
            }
        }

        match self.build_ast() {
            Some(ast) => write!(f, "{}", printer(&ast).0),
            None => write!(f, "{}", self.postfix()),
        }
    }
}
