//! The seed-pattern catalog.
//!
//! Each pattern carries its canonical grid dimensions; the engine runs on
//! whatever torus the pattern declares.

use petri_data::Pattern;

/// Names accepted by [`lookup`], for error messages and `--help`.
pub const PATTERN_NAMES: &[&str] = &[
    "blinker",
    "toad",
    "acorn",
    "beacon",
    "boat",
    "glider",
    "glider_gun",
    "space_ship",
    "die_hard",
    "pulsar",
    "floraison",
    "block_switch_engine",
    "u",
    "flat",
];

/// Resolves a pattern by name. `None` means the caller should abort with a
/// configuration error before anything is spawned.
#[must_use]
pub fn lookup(name: &str) -> Option<Pattern> {
    let pattern = match name {
        "blinker" => Pattern::new(5, 5, vec![(2, 1), (2, 2), (2, 3)]),
        "toad" => Pattern::new(6, 6, vec![(2, 2), (2, 3), (2, 4), (3, 3), (3, 4), (3, 5)]),
        "acorn" => Pattern::new(
            100,
            100,
            vec![
                (51, 52),
                (52, 54),
                (53, 51),
                (53, 52),
                (53, 55),
                (53, 56),
                (53, 57),
            ],
        ),
        "beacon" => Pattern::new(
            6,
            6,
            vec![
                (1, 3),
                (1, 4),
                (2, 3),
                (2, 4),
                (3, 1),
                (3, 2),
                (4, 1),
                (4, 2),
            ],
        ),
        "boat" => Pattern::new(5, 5, vec![(1, 1), (1, 2), (2, 1), (2, 3), (3, 2)]),
        "glider" => Pattern::new(100, 90, vec![(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)]),
        "glider_gun" => Pattern::new(
            200,
            100,
            vec![
                (51, 76),
                (52, 74),
                (52, 76),
                (53, 64),
                (53, 65),
                (53, 72),
                (53, 73),
                (53, 86),
                (53, 87),
                (54, 63),
                (54, 67),
                (54, 72),
                (54, 73),
                (54, 86),
                (54, 87),
                (55, 52),
                (55, 53),
                (55, 62),
                (55, 68),
                (55, 72),
                (55, 73),
                (56, 52),
                (56, 53),
                (56, 62),
                (56, 66),
                (56, 68),
                (56, 69),
                (56, 74),
                (56, 76),
                (57, 62),
                (57, 68),
                (57, 76),
                (58, 63),
                (58, 67),
                (59, 64),
                (59, 65),
            ],
        ),
        "space_ship" => Pattern::new(
            25,
            25,
            vec![
                (11, 13),
                (11, 14),
                (12, 11),
                (12, 12),
                (12, 14),
                (12, 15),
                (13, 11),
                (13, 12),
                (13, 13),
                (13, 14),
                (14, 12),
                (14, 13),
            ],
        ),
        "die_hard" => Pattern::new(
            100,
            100,
            vec![
                (51, 57),
                (52, 51),
                (52, 52),
                (53, 52),
                (53, 56),
                (53, 57),
                (53, 58),
            ],
        ),
        "pulsar" => Pattern::new(
            17,
            17,
            vec![
                (2, 4),
                (2, 5),
                (2, 6),
                (7, 4),
                (7, 5),
                (7, 6),
                (9, 4),
                (9, 5),
                (9, 6),
                (14, 4),
                (14, 5),
                (14, 6),
                (2, 10),
                (2, 11),
                (2, 12),
                (7, 10),
                (7, 11),
                (7, 12),
                (9, 10),
                (9, 11),
                (9, 12),
                (14, 10),
                (14, 11),
                (14, 12),
                (4, 2),
                (5, 2),
                (6, 2),
                (4, 7),
                (5, 7),
                (6, 7),
                (4, 9),
                (5, 9),
                (6, 9),
                (4, 14),
                (5, 14),
                (6, 14),
                (10, 2),
                (11, 2),
                (12, 2),
                (10, 7),
                (11, 7),
                (12, 7),
                (10, 9),
                (11, 9),
                (12, 9),
                (10, 14),
                (11, 14),
                (12, 14),
            ],
        ),
        "floraison" => Pattern::new(
            40,
            40,
            vec![
                (19, 18),
                (19, 19),
                (19, 20),
                (20, 17),
                (20, 19),
                (20, 21),
                (21, 18),
                (21, 19),
                (21, 20),
            ],
        ),
        "block_switch_engine" => Pattern::new(
            400,
            400,
            vec![
                (201, 202),
                (201, 203),
                (202, 202),
                (202, 203),
                (211, 203),
                (212, 204),
                (212, 202),
                (214, 204),
                (214, 201),
                (215, 201),
                (215, 202),
                (216, 201),
            ],
        ),
        "u" => Pattern::new(
            200,
            200,
            vec![
                (101, 101),
                (102, 102),
                (103, 102),
                (103, 101),
                (104, 103),
                (105, 103),
                (105, 102),
                (105, 101),
                (105, 105),
                (103, 105),
                (102, 105),
                (101, 105),
                (101, 104),
            ],
        ),
        "flat" => Pattern::new(
            200,
            400,
            vec![
                (80, 200),
                (81, 200),
                (82, 200),
                (83, 200),
                (84, 200),
                (85, 200),
                (86, 200),
                (87, 200),
                (89, 200),
                (90, 200),
                (91, 200),
                (92, 200),
                (93, 200),
                (97, 200),
                (98, 200),
                (99, 200),
                (106, 200),
                (107, 200),
                (108, 200),
                (109, 200),
                (110, 200),
                (111, 200),
                (112, 200),
                (114, 200),
                (115, 200),
                (116, 200),
                (117, 200),
                (118, 200),
            ],
        ),
        _ => return None,
    };
    Some(pattern)
}
