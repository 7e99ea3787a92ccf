//! The Bombe: cycle-driven rejection of plugboard and rotor hypotheses.
//!
//! For one search cell (wheel order, reflector, ring setting) the Bombe
//! sweeps every rotor start. At each start it hypothesises a stecker
//! partner for the menu's input letter and chases the consequences around
//! the menu's cycles; a cycle that closes on a different letter than it
//! started from falsifies the hypothesis. Almost every start dies this way
//! without the full message ever being decrypted.

use std::collections::HashMap;

use itertools::iproduct;

use crate::enigma::EnigmaMachine;
use crate::menu::Menu;

/// Canonical plugboard: non-identity pairs, each low-high, sorted.
pub type PlugboardPairs = Vec<(u8, u8)>;

/// Rotor starts compatible with each deduced plugboard, for one cell.
pub type Possibilities = HashMap<PlugboardPairs, Vec<[u8; 3]>>;

const UNSET: u8 = u8::MAX;

pub struct Bombe {
    machine: EnigmaMachine,
    ring_settings: [u8; 3],
}

impl Bombe {
    /// Takes a machine carrying the cell's wheel order and reflector; the
    /// rotor states are overwritten per trial. `ring_settings` is
    /// fastest-rotor-first.
    pub fn new(machine: EnigmaMachine, ring_settings: [u8; 3]) -> Self {
        Self {
            machine,
            ring_settings,
        }
    }

    /// Sweeps all 26^3 rotor starts against the menu's cycle paths.
    pub fn run(&mut self, menu: &Menu, paths: &[Vec<u8>]) -> Possibilities {
        let mut possibilities = Possibilities::new();

        for (o0, o1, o2) in iproduct!(0..26u8, 0..26u8, 0..26u8) {
            self.machine.configure_rotors(self.ring_settings, [o0, o1, o2]);

            // Letter pairings already falsified at this start. Once a
            // hypothesis web dies, every pairing it contained dies with it:
            // the deduction along a cycle edge runs both ways, so any of
            // them would lead straight back to the same dead hypothesis.
            let mut contradictions = [0u32; 26];

            'guess: for guess in 0..26u8 {
                let mut plugboard = [UNSET; 26];
                plugboard[menu.input() as usize] = guess;
                plugboard[guess as usize] = menu.input();

                for path in paths {
                    for edge in path.windows(2) {
                        let (letter, letter_cipher) = (edge[0], edge[1]);

                        // First recorded offset for this correspondence.
                        let off = menu.offsets(letter, letter_cipher)[0];

                        // Advance to the press that enciphered crib
                        // position `off`.
                        self.machine.reset();
                        for _ in 0..=off {
                            self.machine.step();
                        }

                        let p = plugboard[letter as usize];
                        if p == UNSET {
                            continue;
                        }
                        let q = self.machine.encrypt_letter(p);

                        if contradictions[letter_cipher as usize] & (1 << q) != 0 {
                            record_web(&mut contradictions, &plugboard);
                            continue 'guess;
                        }

                        let tied = plugboard[letter_cipher as usize];
                        if tied != UNSET {
                            if tied == q {
                                // Cycle closed consistently.
                                break;
                            }
                            add_contradiction(&mut contradictions, letter_cipher, q);
                            record_web(&mut contradictions, &plugboard);
                            continue 'guess;
                        }

                        // q already steckered to a third letter: the new
                        // pair would break the involution.
                        if plugboard[q as usize] != UNSET && plugboard[q as usize] != letter_cipher
                        {
                            add_contradiction(&mut contradictions, letter_cipher, q);
                            record_web(&mut contradictions, &plugboard);
                            continue 'guess;
                        }

                        plugboard[letter_cipher as usize] = q;
                        plugboard[q as usize] = letter_cipher;
                    }
                }

                possibilities
                    .entry(canonical_pairs(&plugboard))
                    .or_default()
                    .push([o0, o1, o2]);
            }
        }

        possibilities
    }
}

fn add_contradiction(contradictions: &mut [u32; 26], a: u8, b: u8) {
    contradictions[a as usize] |= 1 << b;
    contradictions[b as usize] |= 1 << a;
}

/// Marks every pairing of a dead hypothesis web as contradicted.
fn record_web(contradictions: &mut [u32; 26], plugboard: &[u8; 26]) {
    for a in 0..26 {
        let b = plugboard[a as usize];
        if b != UNSET {
            add_contradiction(contradictions, a, b);
        }
    }
}

/// Collapses a hypothesis array to its canonical non-identity pairs.
fn canonical_pairs(plugboard: &[u8; 26]) -> PlugboardPairs {
    let mut pairs = Vec::new();
    for a in 0..26u8 {
        let b = plugboard[a as usize];
        if b != UNSET && a < b {
            pairs.push((a, b));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_pairs_drop_identity_and_sort() {
        let mut plugboard = [UNSET; 26];
        plugboard[3] = 3; // self-steckered letters are identity pairs
        plugboard[25] = 0;
        plugboard[0] = 25;
        plugboard[7] = 10;
        plugboard[10] = 7;

        assert_eq!(canonical_pairs(&plugboard), vec![(0, 25), (7, 10)]);
    }

    #[test]
    fn contradiction_webs_record_both_directions() {
        let mut contradictions = [0u32; 26];
        let mut plugboard = [UNSET; 26];
        plugboard[1] = 4;
        plugboard[4] = 1;

        record_web(&mut contradictions, &plugboard);

        assert_ne!(contradictions[1] & (1 << 4), 0);
        assert_ne!(contradictions[4] & (1 << 1), 0);
        assert_eq!(contradictions[2], 0);
    }
}
