use anyhow::{Result, bail};
use twenty48_core::Direction;

/// One step of a move script.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Play(Direction),
    Undo,
}

/// Parses `u d l r` (any case) as moves and `z` as undo, whitespace and commas are ignored.
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (position, symbol) in script.chars().enumerate() {
        if symbol.is_whitespace() || symbol == ',' {
            continue;
        }
        let step = if symbol.eq_ignore_ascii_case(&'z') {
            Step::Undo
        } else {
            let mut buf = [0; 4];
            match symbol.encode_utf8(&mut buf).parse::<Direction>() {
                Ok(direction) => Step::Play(direction),
                Err(_) => bail!("Unexpected {:?} at position {} in move script", symbol, position),
            }
        };
        steps.push(step);
    }
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_undo() {
        let steps = parse_script("lR u, D z").unwrap();

        assert_eq!(
            steps,
            [
                Step::Play(Direction::Left),
                Step::Play(Direction::Right),
                Step::Play(Direction::Up),
                Step::Play(Direction::Down),
                Step::Undo,
            ]
        );
    }

    #[test]
    fn script_letters_match_direction_names() {
        for direction in Direction::ALL {
            let letter = direction.to_string()[..1].to_string();
            assert_eq!(parse_script(&letter).unwrap(), [Step::Play(direction)]);
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        let err = parse_script("ulx").unwrap_err();
        assert!(err.to_string().contains("position 2"));
    }
}
