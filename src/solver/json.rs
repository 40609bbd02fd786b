//! Wire format of the solver service.
//!
//! The request body is the 20 sticker tuples in slot order, each an array of
//! three color names. The response is either an array of move tokens or a
//! single string explaining why there is no solution.

use crate::prelude::*;

use anyhow::Context;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawReply {
    Moves(Vec<String>),
    Message(String),
}

pub fn encode_request(stickers: &[StickerTuple; SLOT_COUNT]) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&stickers[..])?)
}

pub fn decode_request(body: &str) -> anyhow::Result<[StickerTuple; SLOT_COUNT]> {
    let tuples: Vec<StickerTuple> =
        serde_json::from_str(body).context("Malformed solver request")?;
    let count = tuples.len();
    tuples
        .try_into()
        .map_err(|_| anyhow::anyhow!("Expected {} sticker tuples, got {}", SLOT_COUNT, count))
}

pub fn encode_reply(reply: &SolverReply) -> anyhow::Result<String> {
    let body = match reply {
        SolverReply::Solution(moves) => {
            let tokens = moves.iter().map(|m| m.to_string()).collect::<Vec<_>>();
            serde_json::to_string(&tokens)?
        }
        SolverReply::Rejected(message) => serde_json::to_string(message)?,
    };
    Ok(body)
}

pub fn decode_reply(body: &str) -> anyhow::Result<SolverReply> {
    let raw: RawReply = serde_json::from_str(body).context("Malformed solver reply")?;
    match raw {
        RawReply::Moves(tokens) => {
            let moves = tokens
                .iter()
                .map(|t| t.parse::<Move>())
                .collect::<Result<Vec<_>, _>>()?;
            Ok(SolverReply::Solution(moves))
        }
        RawReply::Message(message) => Ok(SolverReply::Rejected(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_lists_slots_in_order() {
        let body = encode_request(&CubeState::solved().stickers()).unwrap();
        assert!(body.starts_with(r#"[["black","blue","yellow"],["orange","blue","black"]"#));
        let tuples: Vec<Vec<String>> = serde_json::from_str(&body).unwrap();
        assert_eq!(tuples.len(), SLOT_COUNT);
    }

    #[test]
    fn request_decodes_to_same_cube() {
        let cube = cube_with_moves("R U F' D2");
        let body = encode_request(&cube.stickers()).unwrap();
        assert_eq!(
            CubeState::from_stickers(decode_request(&body).unwrap()),
            cube
        );
    }

    #[test]
    fn short_request_is_rejected() {
        assert!(decode_request(r#"[["red","red","red"]]"#).is_err());
        assert!(decode_request(r#"[["red","pink","red"]]"#).is_err());
    }

    #[test]
    fn decodes_solution() {
        assert_eq!(
            decode_reply(r#"["R", "U'", "F2"]"#).unwrap(),
            SolverReply::Solution(Move::parse_sequence("R U' F2").unwrap())
        );
    }

    #[test]
    fn decodes_message() {
        assert_eq!(
            decode_reply(r#""Invalid cube""#).unwrap(),
            SolverReply::Rejected("Invalid cube".to_string())
        );
    }

    #[test]
    fn malformed_token_in_reply_fails() {
        let err = decode_reply(r#"["R", "Q"]"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ParseError>(),
            Some(&ParseError::UnknownFace('Q'))
        );
        assert!(decode_reply("42").is_err());
    }

    #[test]
    fn replies_survive_the_wire() {
        for reply in [
            SolverReply::Solution(Move::parse_sequence("B' L2 D").unwrap()),
            SolverReply::Rejected("Cube is already solved".to_string()),
        ] {
            assert_eq!(decode_reply(&encode_reply(&reply).unwrap()).unwrap(), reply);
        }
    }
}
