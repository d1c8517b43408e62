//! Parenthesizer: rewrites a token stream so precedence is encoded
//! exclusively by explicit parentheses (spec §4.2), operating only on the
//! top level of the stream — an existing parenthesized group is treated as
//! one opaque operand and never opened back up, since the AST constructor
//! (§4.3) is itself precedence-aware and resolves whatever is inside a
//! group on its own. Precedence, highest to lowest: `!`, `&`, `|`, `=>`,
//! `<=>`. `&`/`|` fold left-associatively, `=>`/`<=>` fold
//! right-associatively.

use crate::error::{ParseError, ParseResult};
use crate::token::{Token, TokenSpan};

/// Verify balanced parens and re-bracket `tokens` so every binary operator
/// and every negation at the top level is wrapped in an explicit group.
pub fn parenthesize(tokens: &[TokenSpan]) -> ParseResult<Vec<TokenSpan>> {
    check_balanced(tokens)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    if is_single_outer_group(tokens) {
        return Ok(tokens.to_vec());
    }
    bracket_top_level(tokens)
}

fn check_balanced(tokens: &[TokenSpan]) -> ParseResult<()> {
    let mut depth: i64 = 0;
    for t in tokens {
        match t.token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParens);
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnbalancedParens);
    }
    Ok(())
}

/// True when `tokens` is `( ... )` with the outermost parens' depth
/// reaching zero only at the final token — i.e. one group spans the whole
/// stream, not two or more groups placed side by side.
fn is_single_outer_group(tokens: &[TokenSpan]) -> bool {
    if tokens.first().map(|t| &t.token) != Some(&Token::LParen) {
        return false;
    }
    let mut depth: i64 = 0;
    for (i, t) in tokens.iter().enumerate() {
        match t.token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            _ => {}
        }
        if depth == 0 {
            return i == tokens.len() - 1;
        }
    }
    false
}

fn find_matching_rparen(tokens: &[TokenSpan], open: usize) -> usize {
    let mut depth = 0i64;
    for (i, t) in tokens.iter().enumerate().skip(open) {
        match t.token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    tokens.len() - 1
}

fn synth(kind: Token, at: &TokenSpan) -> TokenSpan {
    let lexeme = match &kind {
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
        _ => unreachable!("synth is only used for parens"),
    };
    TokenSpan { token: kind, index: at.index, lexeme }
}

fn is_operand_start(tok: &Token) -> bool {
    matches!(tok, Token::LParen | Token::Not | Token::Ident(_) | Token::True | Token::False)
}

/// Consume one top-level operand starting at `pos`: a negation chain, a
/// parenthesized group (opaque — its interior is copied verbatim), or a
/// single atom. Returns the new cursor and the operand's token sequence.
fn consume_operand(tokens: &[TokenSpan], pos: usize) -> ParseResult<(usize, Vec<TokenSpan>)> {
    if pos >= tokens.len() {
        return Err(ParseError::MissingOperand {
            op: "(end of input)".to_string(),
            index: tokens.last().map(|t| t.index + 1).unwrap_or(0),
        });
    }

    match &tokens[pos].token {
        Token::Not => {
            let not_tok = tokens[pos].clone();
            let (next, inner) = consume_operand(tokens, pos + 1)?;
            let mut repr = vec![synth(Token::LParen, &not_tok), not_tok.clone()];
            repr.extend(inner);
            repr.push(synth(Token::RParen, &not_tok));
            Ok((next, repr))
        }
        Token::LParen => {
            let close = find_matching_rparen(tokens, pos);
            let repr = tokens[pos..=close].to_vec();
            Ok((close + 1, repr))
        }
        Token::Ident(_) | Token::True | Token::False => Ok((pos + 1, vec![tokens[pos].clone()])),
        other => Err(ParseError::UnexpectedToken { index: tokens[pos].index, lexeme: other.to_string() }),
    }
}

#[derive(Clone)]
enum Item {
    Operand(Vec<TokenSpan>),
    Op(TokenSpan),
}

fn split_top_level(tokens: &[TokenSpan]) -> ParseResult<Vec<Item>> {
    let mut items = Vec::new();
    let mut pos = 0;
    loop {
        let (next, operand) = consume_operand(tokens, pos)?;
        items.push(Item::Operand(operand));
        pos = next;
        if pos >= tokens.len() {
            break;
        }
        match &tokens[pos].token {
            Token::And | Token::Or | Token::Imp | Token::Iff => {
                items.push(Item::Op(tokens[pos].clone()));
                pos += 1;
            }
            other => {
                return Err(ParseError::UnexpectedToken { index: tokens[pos].index, lexeme: other.to_string() });
            }
        }
        if pos >= tokens.len() {
            return Err(ParseError::MissingOperand {
                op: tokens[pos - 1].lexeme.clone(),
                index: tokens[pos - 1].index,
            });
        }
    }
    Ok(items)
}

fn wrap_group(op: &TokenSpan, l: &[TokenSpan], r: &[TokenSpan]) -> Vec<TokenSpan> {
    let mut out = vec![synth(Token::LParen, op)];
    out.extend_from_slice(l);
    out.push(op.clone());
    out.extend_from_slice(r);
    out.push(synth(Token::RParen, op));
    out
}

fn operand_tokens(item: &Item) -> &[TokenSpan] {
    match item {
        Item::Operand(toks) => toks,
        Item::Op(_) => unreachable!("expected an operand item"),
    }
}

fn fold_left_assoc(items: Vec<Item>, target: &Token) -> Vec<Item> {
    let mut items = items;
    loop {
        let pos = items.iter().position(|it| matches!(it, Item::Op(t) if &t.token == target));
        let Some(i) = pos else { break };
        let left = operand_tokens(&items[i - 1]).to_vec();
        let right = operand_tokens(&items[i + 1]).to_vec();
        let op = match &items[i] {
            Item::Op(t) => t.clone(),
            _ => unreachable!(),
        };
        let merged = Item::Operand(wrap_group(&op, &left, &right));
        items.splice(i - 1..=i + 1, [merged]);
    }
    items
}

fn fold_right_assoc(items: Vec<Item>, target: &Token) -> Vec<Item> {
    let mut items = items;
    loop {
        let pos = items.iter().rposition(|it| matches!(it, Item::Op(t) if &t.token == target));
        let Some(i) = pos else { break };
        let left = operand_tokens(&items[i - 1]).to_vec();
        let right = operand_tokens(&items[i + 1]).to_vec();
        let op = match &items[i] {
            Item::Op(t) => t.clone(),
            _ => unreachable!(),
        };
        let merged = Item::Operand(wrap_group(&op, &left, &right));
        items.splice(i - 1..=i + 1, [merged]);
    }
    items
}

fn bracket_top_level(tokens: &[TokenSpan]) -> ParseResult<Vec<TokenSpan>> {
    let items = split_top_level(tokens)?;
    let items = fold_left_assoc(items, &Token::And);
    let items = fold_left_assoc(items, &Token::Or);
    let items = fold_right_assoc(items, &Token::Imp);
    let items = fold_right_assoc(items, &Token::Iff);
    debug_assert_eq!(items.len(), 1);
    Ok(operand_tokens(&items[0]).to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn render(tokens: &[TokenSpan]) -> String {
        tokens.iter().map(|t| t.lexeme.clone()).collect::<Vec<_>>().join(" ")
    }

    fn bracketed(input: &str) -> String {
        let toks = tokenize(input);
        render(&parenthesize(&toks).unwrap())
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(bracketed("a & b | c"), "( ( a & b ) | c )");
    }

    #[test]
    fn negation_binds_tightest() {
        assert_eq!(bracketed("!a & b"), "( ( ! a ) & b )");
    }

    #[test]
    fn implication_is_right_associative() {
        assert_eq!(bracketed("a => b => c"), "( a => ( b => c ) )");
    }

    #[test]
    fn conjunction_is_left_associative() {
        assert_eq!(bracketed("a & b & c"), "( ( a & b ) & c )");
    }

    #[test]
    fn fully_parenthesized_input_is_untouched() {
        let toks = tokenize("(a & b)");
        let out = parenthesize(&toks).unwrap();
        assert_eq!(render(&out), "( a & b )");
    }

    #[test]
    fn unbalanced_parens_is_an_error() {
        let toks = tokenize("(a & b");
        assert_eq!(parenthesize(&toks), Err(ParseError::UnbalancedParens));
    }

    #[test]
    fn empty_input_is_an_error() {
        let toks = tokenize("   ");
        assert_eq!(parenthesize(&toks), Err(ParseError::Empty));
    }

    #[test]
    fn missing_operand_is_an_error() {
        let toks = tokenize("a &");
        assert!(matches!(parenthesize(&toks), Err(ParseError::MissingOperand { .. })));
    }
}
