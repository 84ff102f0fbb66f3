//! Property-based tests for compile + evaluate.
//!
//! Random expression trees are printed back to text, compiled, and
//! evaluated against a direct tree walk using the same operator semantics.
//! Debug assertions in the evaluator check that every compiled program ends
//! with exactly one value on the stack.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use graff_compile::compile;
use graff_eval::{evaluate, Machine, Sweep};
use graff_ir::{finite_or_nan, BinaryOp, Func, UnaryOp};
use proptest::prelude::*;

// ============================================================================
// Reference trees
// ============================================================================

#[derive(Clone, Debug)]
enum Expr {
    Num(f64),
    Var,
    Neg(Box<Expr>),
    Bin(BinaryOp, Box<Expr>, Box<Expr>),
    Call(Func, Box<Expr>),
}

impl Expr {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Expr::Num(n) => *n,
            Expr::Var => finite_or_nan(x),
            Expr::Neg(e) => UnaryOp::Neg.apply(e.eval(x)),
            Expr::Bin(op, l, r) => op.apply(l.eval(x), r.eval(x)),
            Expr::Call(func, e) => func.apply(e.eval(x)),
        }
    }

    /// Precedence of the outermost construct; atoms bind tightest.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Num(_) | Expr::Var | Expr::Call(..) => u8::MAX,
            Expr::Neg(_) => UnaryOp::PRECEDENCE,
            Expr::Bin(op, ..) => op.precedence(),
        }
    }

    /// Every subexpression parenthesized.
    fn full(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Var => "x".to_string(),
            Expr::Neg(e) => format!("-({})", e.full()),
            Expr::Bin(op, l, r) => format!("({}) {} ({})", l.full(), op.symbol(), r.full()),
            Expr::Call(func, e) => format!("{}({})", func.name(), e.full()),
        }
    }

    /// Only the parentheses precedence and associativity require.
    fn minimal(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Var => "x".to_string(),
            Expr::Neg(e) => format!("-{}", wrap(e, e.precedence() < UnaryOp::PRECEDENCE)),
            Expr::Bin(op, l, r) => {
                let prec = op.precedence();
                let left_parens =
                    l.precedence() < prec || (l.precedence() == prec && op.is_right_assoc());
                let right_parens =
                    r.precedence() < prec || (r.precedence() == prec && !op.is_right_assoc());
                format!(
                    "{}{}{}",
                    wrap(l, left_parens),
                    op.symbol(),
                    wrap(r, right_parens)
                )
            }
            Expr::Call(func, e) => format!("{}({})", func.name(), e.minimal()),
        }
    }
}

fn wrap(e: &Expr, parens: bool) -> String {
    if parens {
        format!("({})", e.minimal())
    } else {
        e.minimal()
    }
}

// ============================================================================
// Strategies
// ============================================================================

fn arb_binop() -> impl Strategy<Value = BinaryOp> {
    prop_oneof![
        Just(BinaryOp::Add),
        Just(BinaryOp::Sub),
        Just(BinaryOp::Mul),
        Just(BinaryOp::Div),
        Just(BinaryOp::Pow),
    ]
}

fn arb_func() -> impl Strategy<Value = Func> {
    (0..Func::ALL.len()).prop_map(|i| Func::ALL[i])
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0u32..400).prop_map(|n| Expr::Num(f64::from(n) / 4.0)),
        Just(Expr::Var),
    ];
    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| Expr::Neg(Box::new(e))),
            (arb_binop(), inner.clone(), inner.clone())
                .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r))),
            (arb_func(), inner).prop_map(|(f, e)| Expr::Call(f, Box::new(e))),
        ]
    })
}

/// Token soup: mostly invalid, occasionally valid.
fn arb_token_soup() -> impl Strategy<Value = String> {
    let token = prop_oneof![
        Just("x"),
        Just("1"),
        Just("2.5"),
        Just("pi"),
        Just("+"),
        Just("-"),
        Just("*"),
        Just("/"),
        Just("^"),
        Just("("),
        Just(")"),
        Just("sin"),
        Just("sqrt"),
        Just(" "),
    ];
    proptest::collection::vec(token, 0..24).prop_map(|parts| parts.concat())
}

fn arb_input() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(-1.0), Just(1.0), -50.0f64..50.0]
}

fn same(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a == b
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fully_parenthesized_matches_tree(expr in arb_expr(), x in arb_input()) {
        let source = expr.full();
        let program = compile(&source, "x").unwrap();
        let got = evaluate(x, &program);
        let want = expr.eval(x);
        prop_assert!(same(got, want), "{source} at {x}: got {got}, want {want}");
    }

    #[test]
    fn minimal_parentheses_match_tree(expr in arb_expr(), x in arb_input()) {
        let source = expr.minimal();
        let program = compile(&source, "x").unwrap();
        let got = evaluate(x, &program);
        let want = expr.eval(x);
        prop_assert!(same(got, want), "{source} at {x}: got {got}, want {want}");
    }

    #[test]
    fn compiled_soup_always_evaluates(source in arb_token_soup(), x in arb_input()) {
        if let Ok(program) = compile(&source, "x") {
            prop_assert!(program.max_depth() >= 1);
            let mut machine = Machine::new();
            let value = machine.eval(&program, x);
            prop_assert!(value.is_nan() || value.is_finite());
        }
    }

    #[test]
    fn results_are_finite_or_nan(expr in arb_expr()) {
        let program = compile(&expr.minimal(), "x").unwrap();
        let mut machine = Machine::new();
        let mut out = Vec::new();
        machine.sample_into(&program, Sweep::over(-10.0, 10.0, 41), &mut out);
        prop_assert_eq!(out.len(), 41);
        prop_assert!(out.iter().all(|v| v.is_nan() || v.is_finite()));
    }

    #[test]
    fn recompiling_is_deterministic(expr in arb_expr(), x in arb_input()) {
        let source = expr.minimal();
        let a = compile(&source, "x").unwrap();
        let b = compile(&source, "x").unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(same(evaluate(x, &a), evaluate(x, &b)));
    }
}
