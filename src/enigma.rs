use std::fmt::{Display, Write};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnigmaError {
    #[error("invalid configuration letter: {0:?}")]
    InvalidLetter(char),
    #[error("plugboard pairs {0:?} with itself")]
    PlugboardSelfPair(char),
    #[error("letter {0:?} appears in more than one plugboard pair")]
    PlugboardDuplicate(char),
    #[error("wheel order repeats rotor {0:?}")]
    DuplicateRotor(RotorId),
}

/// Converts an uppercase letter to its `0..26` index.
pub fn letter_index(c: char) -> Result<u8, EnigmaError> {
    if c.is_ascii_uppercase() {
        Ok(c as u8 - b'A')
    } else {
        Err(EnigmaError::InvalidLetter(c))
    }
}

/// Inverse of [`letter_index`]. Requires `i` in `0..26`.
pub fn index_letter(i: u8) -> char {
    debug_assert!((0..26).contains(&i));
    (i + b'A') as char
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RotorId {
    I = 0,
    II = 1,
    III = 2,
    IV = 3,
    V = 4,
    VI = 5,
    VII = 6,
    VIII = 7,
}

// The rotor wirings are fixed historical values, so the permutation tables
// are generated at compile time. If run-time wirings were ever wanted, the
// way to do it would be to generate the tables once at startup and hand out
// references from RotorId instead.
const ROTOR_FORWARD_WIRING: [[u8; 26]; 8] = [
    RotorId::gen_forward_wiring(RotorId::I),
    RotorId::gen_forward_wiring(RotorId::II),
    RotorId::gen_forward_wiring(RotorId::III),
    RotorId::gen_forward_wiring(RotorId::IV),
    RotorId::gen_forward_wiring(RotorId::V),
    RotorId::gen_forward_wiring(RotorId::VI),
    RotorId::gen_forward_wiring(RotorId::VII),
    RotorId::gen_forward_wiring(RotorId::VIII),
];

const ROTOR_BACKWARD_WIRING: [[u8; 26]; 8] = [
    RotorId::gen_backward_wiring(RotorId::I),
    RotorId::gen_backward_wiring(RotorId::II),
    RotorId::gen_backward_wiring(RotorId::III),
    RotorId::gen_backward_wiring(RotorId::IV),
    RotorId::gen_backward_wiring(RotorId::V),
    RotorId::gen_backward_wiring(RotorId::VI),
    RotorId::gen_backward_wiring(RotorId::VII),
    RotorId::gen_backward_wiring(RotorId::VIII),
];

impl RotorId {
    // VI-VIII carry two notches.
    fn is_at_notch(self, position: u8) -> bool {
        match self {
            RotorId::I => position == 16,
            RotorId::II => position == 4,
            RotorId::III => position == 21,
            RotorId::IV => position == 9,
            RotorId::V => position == 25,
            RotorId::VI => position == 12 || position == 25,
            RotorId::VII => position == 12 || position == 25,
            RotorId::VIII => position == 12 || position == 25,
        }
    }

    const fn chars(s: Self) -> [u8; 26] {
        *match s {
            RotorId::I => b"EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorId::II => b"AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorId::III => b"BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorId::IV => b"ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorId::V => b"VZBRGITYUPSDNHLXAWMJQOFECK",
            RotorId::VI => b"JPGVOUMFYQBENHZRDKASXLICTW",
            RotorId::VII => b"NZJHGRCXMYSWBOUFAIVLPEKQDT",
            RotorId::VIII => b"FKQHTLXOCBJSPDZRAMEWNIUYGV",
        }
    }

    const fn gen_forward_wiring(s: Self) -> [u8; 26] {
        let chars = Self::chars(s);
        let mut wiring = [0; 26];

        let mut i = 0;
        while i < 26 {
            wiring[i] = chars[i] - b'A';
            i += 1;
        }

        wiring
    }

    const fn gen_backward_wiring(s: Self) -> [u8; 26] {
        let forward_wiring = Self::gen_forward_wiring(s);
        let mut backwards_wiring = [0; 26];

        let mut i = 0;
        while i < 26 {
            backwards_wiring[forward_wiring[i] as usize] = i as u8;
            i += 1;
        }

        backwards_wiring
    }

    fn forward_wiring(self) -> &'static [u8; 26] {
        &ROTOR_FORWARD_WIRING[self as usize]
    }

    fn backward_wiring(self) -> &'static [u8; 26] {
        &ROTOR_BACKWARD_WIRING[self as usize]
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReflectorId {
    B = 0,
    C = 1,
}

const REFLECTOR_WIRING: [[u8; 26]; 2] = [
    ReflectorId::gen_wiring(ReflectorId::B),
    ReflectorId::gen_wiring(ReflectorId::C),
];

impl ReflectorId {
    const fn gen_wiring(self) -> [u8; 26] {
        let mut wiring = *match self {
            ReflectorId::B => b"YRUHQSLDPXNGOKMIEBFZCWVJAT",
            ReflectorId::C => b"FVPJIAOYEDRZXWGCTKUQSBNMHL",
        };

        let mut i = 0;
        while i < 26 {
            wiring[i] -= b'A';
            i += 1;
        }
        wiring
    }

    fn reflect(self, c: u8) -> u8 {
        REFLECTOR_WIRING[self as usize][c as usize]
    }
}

/// A wired wheel with a mutable rotational state.
///
/// The ring setting and the window offset are folded into a single
/// `position` scalar at configure time, which keeps the signal path down to
/// one shifted table lookup each way.
#[derive(Debug, Clone, Copy)]
pub struct Rotor {
    id: RotorId,
    ring_setting: u8,
    offset: u8,
    position: u8,
}

impl Rotor {
    pub fn new(id: RotorId, ring_setting: u8, offset: u8) -> Self {
        let mut rotor = Self {
            id,
            ring_setting: 0,
            offset: 0,
            position: 0,
        };
        rotor.configure(ring_setting, offset);
        rotor
    }

    /// Requires `ring_setting` and `offset` in the range 0..26.
    pub fn configure(&mut self, ring_setting: u8, offset: u8) {
        assert!((0..26).contains(&ring_setting));
        assert!((0..26).contains(&offset));

        self.ring_setting = ring_setting;
        self.offset = offset;
        self.position = match ring_setting.overflowing_sub(offset) {
            (x, true) => x.wrapping_add(26),
            (x, false) => x,
        };
    }

    pub fn step(&mut self) {
        self.position = match self.position + 1 {
            v @ 0..=25 => v,
            v => v - 26,
        };
    }

    pub fn unstep(&mut self) {
        self.position = match self.position {
            0 => 25,
            v => v - 1,
        };
    }

    /// True while the pawl sits in a turnover notch, i.e. the next press
    /// will carry the left neighbour along.
    pub fn at_turnover(&self) -> bool {
        self.id.is_at_notch(self.position)
    }

    /// True if the position one back is a turnover notch.
    pub fn did_turnover(&self) -> bool {
        let previous = match self.position {
            0 => 25,
            v => v - 1,
        };
        self.id.is_at_notch(previous)
    }

    // This is the hottest of hot functions: the Bombe sweep runs it for
    // every edge of every plugboard guess of every rotor start, so the
    // modulo instructions are replaced with compare-and-correct arithmetic.
    /// Requires that `c` and `position` are in the range 0..26.
    fn signal(c: u8, position: u8, mapping: &[u8; 26]) -> u8 {
        let idx = match c + position {
            v @ 0..=25 => v,
            v => v - 26,
        };

        let val = mapping[idx as usize];
        match val.overflowing_sub(position) {
            (x, true) => x.wrapping_add(26),
            (x, false) => x,
        }
    }

    /// Assumes that `c` is in the range 0..26.
    pub fn signal_forward(&self, c: u8) -> u8 {
        Self::signal(c, self.position, self.id.forward_wiring())
    }

    /// Assumes that `c` is in the range 0..26.
    pub fn signal_backward(&self, c: u8) -> u8 {
        Self::signal(c, self.position, self.id.backward_wiring())
    }

    pub fn id(&self) -> RotorId {
        self.id
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Plugboard {
    wiring: [u8; 26],
}

impl Plugboard {
    /// Builds a plugboard from letter pairs, e.g. `&[('A', 'B')]`.
    pub fn new(connections: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut pairs = Vec::with_capacity(connections.len());
        for &(a, b) in connections {
            pairs.push((letter_index(a)?, letter_index(b)?));
        }
        Self::from_pairs(&pairs)
    }

    /// Builds a plugboard from letter-index pairs. Unsteckered letters map
    /// to themselves.
    pub fn from_pairs(pairs: &[(u8, u8)]) -> Result<Self, EnigmaError> {
        let mut wiring = Self::identity();

        // No need for fancy hashsets, we're doing ASCII!
        let mut seen = [false; 26];

        for &(a, b) in pairs {
            assert!((0..26).contains(&a) && (0..26).contains(&b));

            if a == b {
                return Err(EnigmaError::PlugboardSelfPair(index_letter(a)));
            }
            if seen[a as usize] {
                return Err(EnigmaError::PlugboardDuplicate(index_letter(a)));
            }
            if seen[b as usize] {
                return Err(EnigmaError::PlugboardDuplicate(index_letter(b)));
            }

            seen[a as usize] = true;
            seen[b as usize] = true;

            wiring[a as usize] = b;
            wiring[b as usize] = a;
        }

        Ok(Self { wiring })
    }

    /// The unsteckered board.
    pub fn empty() -> Self {
        Self {
            wiring: Self::identity(),
        }
    }

    fn identity() -> [u8; 26] {
        let mut wiring = [0; 26];
        wiring.iter_mut().zip(0..).for_each(|(w, i)| *w = i);

        wiring
    }

    fn forward(&self, c: u8) -> u8 {
        self.wiring[c as usize]
    }

    /// The non-identity pairs, each ordered low-high, in ascending order.
    pub fn pairs(&self) -> Vec<(u8, u8)> {
        let mut pairs = Vec::new();

        for (idx, &other) in self.wiring.iter().enumerate() {
            let idx = idx as u8;
            if idx < other {
                pairs.push((idx, other));
            }
        }

        pairs
    }
}

impl Display for Plugboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (a, b)) in self.pairs().into_iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            f.write_char(index_letter(a))?;
            f.write_char(index_letter(b))?;
        }

        Ok(())
    }
}

// Because a key is just a handful of bytes, creating and copying one is
// massively cheaper than re-parsing wiring strings, which matters when the
// search spins up a fresh machine per survivor.
#[derive(Debug, Clone, Copy)]
pub struct EnigmaKey {
    left_rotor: Rotor,
    middle_rotor: Rotor,
    right_rotor: Rotor,
    reflector: ReflectorId,
    plugboard: Plugboard,
}

impl EnigmaKey {
    pub fn new(
        left_rotor: Rotor,
        middle_rotor: Rotor,
        right_rotor: Rotor,
        reflector: ReflectorId,
        plugboard: Plugboard,
    ) -> Self {
        Self {
            left_rotor,
            middle_rotor,
            right_rotor,
            reflector,
            plugboard,
        }
    }

    /// Get a reference to the key's left rotor.
    pub fn left_rotor(&self) -> &Rotor {
        &self.left_rotor
    }

    /// Get a reference to the key's middle rotor.
    pub fn middle_rotor(&self) -> &Rotor {
        &self.middle_rotor
    }

    /// Get a reference to the key's right rotor.
    pub fn right_rotor(&self) -> &Rotor {
        &self.right_rotor
    }

    pub fn reflector(&self) -> ReflectorId {
        self.reflector
    }

    /// Get a reference to the key's plugboard.
    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    /// Set the key's plugboard.
    pub fn set_plugboard(&mut self, plugboard: Plugboard) {
        self.plugboard = plugboard;
    }
}

impl Display for EnigmaKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field(
                "Left Rotor",
                &format_args!(
                    "{:?} {} {}",
                    self.left_rotor.id, self.left_rotor.position, self.left_rotor.ring_setting
                ),
            )
            .field(
                "Middle Rotor",
                &format_args!(
                    "{:?} {} {}",
                    self.middle_rotor.id, self.middle_rotor.position, self.middle_rotor.ring_setting
                ),
            )
            .field(
                "Right Rotor",
                &format_args!(
                    "{:?} {} {}",
                    self.right_rotor.id, self.right_rotor.position, self.right_rotor.ring_setting
                ),
            )
            .field("Reflector", &format_args!("{:?}", self.reflector))
            .field("Plugboard", &format_args!("{}", self.plugboard))
            .finish()
    }
}

/// Three rotors, a reflector, and a plugboard, with the right rotor
/// stepping fastest.
///
/// The rotor states captured at configure time are kept so [`reset`] can
/// rewind the machine between Bombe trials without rebuilding anything.
///
/// [`reset`]: EnigmaMachine::reset
#[derive(Debug, Clone, Copy)]
pub struct EnigmaMachine {
    left_rotor: Rotor,
    middle_rotor: Rotor,
    right_rotor: Rotor,
    reflector: ReflectorId,
    plugboard: Plugboard,
    initial_rotors: [Rotor; 3],
}

impl EnigmaMachine {
    pub fn new(key: EnigmaKey) -> Result<Self, EnigmaError> {
        let (l, m, r) = (key.left_rotor.id, key.middle_rotor.id, key.right_rotor.id);
        if l == m || l == r {
            return Err(EnigmaError::DuplicateRotor(l));
        }
        if m == r {
            return Err(EnigmaError::DuplicateRotor(m));
        }

        Ok(Self {
            left_rotor: key.left_rotor,
            middle_rotor: key.middle_rotor,
            right_rotor: key.right_rotor,
            reflector: key.reflector,
            plugboard: key.plugboard,
            initial_rotors: [key.right_rotor, key.middle_rotor, key.left_rotor],
        })
    }

    /// The machine's current state as a key.
    pub fn key(&self) -> EnigmaKey {
        EnigmaKey {
            left_rotor: self.left_rotor,
            middle_rotor: self.middle_rotor,
            right_rotor: self.right_rotor,
            reflector: self.reflector,
            plugboard: self.plugboard,
        }
    }

    pub fn set_plugboard(&mut self, plugboard: Plugboard) {
        self.plugboard = plugboard;
    }

    /// Reconfigures all three rotors and refreshes the [`reset`] snapshot.
    /// Both arrays are fastest-rotor-first.
    ///
    /// [`reset`]: EnigmaMachine::reset
    pub fn configure_rotors(&mut self, ring_settings: [u8; 3], offsets: [u8; 3]) {
        self.right_rotor.configure(ring_settings[0], offsets[0]);
        self.middle_rotor.configure(ring_settings[1], offsets[1]);
        self.left_rotor.configure(ring_settings[2], offsets[2]);
        self.initial_rotors = [self.right_rotor, self.middle_rotor, self.left_rotor];
    }

    /// Restores the rotors to the state captured when they were last
    /// configured.
    pub fn reset(&mut self) {
        let [right, middle, left] = self.initial_rotors;
        self.right_rotor = right;
        self.middle_rotor = middle;
        self.left_rotor = left;
    }

    /// Advances the rotors for one key press.
    ///
    /// The middle rotor advances when either it or the fast rotor sits at a
    /// notch; advancing on its own notch is what produces the double-step
    /// anomaly on consecutive presses.
    pub fn step(&mut self) {
        let middle_at_notch = self.middle_rotor.at_turnover();
        let right_at_notch = self.right_rotor.at_turnover();

        if middle_at_notch {
            self.left_rotor.step();
        }
        if middle_at_notch || right_at_notch {
            self.middle_rotor.step();
        }
        self.right_rotor.step();
    }

    /// Retracts the rotors by one key press, inverting [`step`].
    ///
    /// A machine resting one past the middle notch is indistinguishable
    /// from one that just double-stepped onto it, so a press that merely
    /// parked there unwinds as the double-step; every other press inverts
    /// exactly.
    ///
    /// [`step`]: EnigmaMachine::step
    pub fn unstep(&mut self) {
        self.right_rotor.unstep();
        if self.right_rotor.at_turnover() || self.middle_rotor.did_turnover() {
            self.middle_rotor.unstep();
        }
        if self.middle_rotor.at_turnover() {
            self.left_rotor.unstep();
        }
    }

    /// Encrypts one letter at the current state, without stepping.
    pub fn encrypt_letter(&self, c: u8) -> u8 {
        let mut c = self.plugboard.forward(c);

        // Right to left
        c = self.right_rotor.signal_forward(c);
        c = self.middle_rotor.signal_forward(c);
        c = self.left_rotor.signal_forward(c);

        // Reflector
        c = self.reflector.reflect(c);

        // Left to right
        c = self.left_rotor.signal_backward(c);
        c = self.middle_rotor.signal_backward(c);
        c = self.right_rotor.signal_backward(c);

        self.plugboard.forward(c)
    }

    /// Encrypts a message, stepping before each letter.
    pub fn encrypt(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());

        for c in text.chars().map(|c| c.to_ascii_uppercase()) {
            assert!(c.is_ascii_uppercase());
            self.step();
            out.push(index_letter(self.encrypt_letter(c as u8 - b'A')));
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // order is left-to-right; rings/offsets are fastest-first
    fn machine(
        order: [RotorId; 3],
        rings: [u8; 3],
        offsets: [u8; 3],
        plugs: &[(char, char)],
    ) -> EnigmaMachine {
        let key = EnigmaKey::new(
            Rotor::new(order[0], rings[2], offsets[2]),
            Rotor::new(order[1], rings[1], offsets[1]),
            Rotor::new(order[2], rings[0], offsets[0]),
            ReflectorId::B,
            Plugboard::new(plugs).unwrap(),
        );
        EnigmaMachine::new(key).unwrap()
    }

    fn positions(m: &EnigmaMachine) -> [u8; 3] {
        [
            m.left_rotor.position(),
            m.middle_rotor.position(),
            m.right_rotor.position(),
        ]
    }

    #[test]
    fn wiring_tables_are_inverse_bijections() {
        let ids = [
            RotorId::I,
            RotorId::II,
            RotorId::III,
            RotorId::IV,
            RotorId::V,
            RotorId::VI,
            RotorId::VII,
            RotorId::VIII,
        ];
        for &id in &ids {
            let forward = id.forward_wiring();
            let backward = id.backward_wiring();
            for i in 0..26 {
                assert_eq!(backward[forward[i] as usize] as usize, i, "{:?}", id);
            }
        }
    }

    #[test]
    fn reflectors_are_fixed_point_free_involutions() {
        for &id in &[ReflectorId::B, ReflectorId::C] {
            for c in 0..26 {
                assert_ne!(id.reflect(c), c, "{:?}", id);
                assert_eq!(id.reflect(id.reflect(c)), c, "{:?}", id);
            }
        }
    }

    #[test]
    fn all_a_configuration_encrypts_aaaaa_to_bdzgo() {
        let mut m = machine(
            [RotorId::I, RotorId::II, RotorId::III],
            [0, 0, 0],
            [0, 0, 0],
            &[],
        );
        assert_eq!(m.encrypt("AAAAA"), "BDZGO");
    }

    #[test]
    fn encryption_is_self_inverse_after_reset() {
        let mut m = machine(
            [RotorId::II, RotorId::V, RotorId::III],
            [3, 7, 11],
            [4, 9, 17],
            &[],
        );
        let plaintext = "THEQUICKBROWNFOXJUMPSOVERTHELAZYDOG";
        let ciphertext = m.encrypt(plaintext);
        assert_eq!(ciphertext, "RPMAGWDNDHVFRZVZYISHLGDWCMELUHQKZPQ");

        m.reset();
        assert_eq!(m.encrypt(&ciphertext), plaintext);
    }

    #[test]
    fn plugboard_and_rings_round_trip() {
        let mut m = machine(
            [RotorId::IV, RotorId::I, RotorId::V],
            [2, 4, 6],
            [10, 20, 5],
            &[('A', 'B'), ('C', 'D'), ('E', 'F')],
        );
        let plaintext = "SIXTYLETTERSOFPLAINTEXTTOCHECKTHEPLUGBOARDANDRINGS";
        let ciphertext = m.encrypt(plaintext);
        assert_eq!(ciphertext, "KZBKXEWDFWFIUMBVQQIGJMRPSSFJFWQFWMVIKIYHKAEXSCJSPI");

        m.reset();
        assert_eq!(m.encrypt(&ciphertext), plaintext);
    }

    #[test]
    fn fixed_state_encryption_is_an_involution_without_fixed_points() {
        let mut m = machine(
            [RotorId::I, RotorId::II, RotorId::III],
            [0, 0, 0],
            [0, 0, 0],
            &[('Q', 'Z')],
        );
        for press in 0..40 {
            m.step();
            for c in 0..26 {
                let e = m.encrypt_letter(c);
                assert_ne!(e, c, "fixed point at press {}", press);
                assert_eq!(m.encrypt_letter(e), c, "not involutive at press {}", press);
            }
        }
    }

    #[test]
    fn middle_rotor_double_steps() {
        // Left I, middle II (notch at E = 4), right III (notch at V = 21).
        // Offsets put the right rotor at 20 and the middle at 3: the first
        // press only moves the right rotor onto its notch, the second
        // carries the middle onto its own notch, and the third press
        // double-steps the middle and carries the left rotor.
        let mut m = machine(
            [RotorId::I, RotorId::II, RotorId::III],
            [0, 0, 0],
            [6, 23, 0],
            &[],
        );
        assert_eq!(positions(&m), [0, 3, 20]);

        m.step();
        assert_eq!(positions(&m), [0, 3, 21]);
        m.step();
        assert_eq!(positions(&m), [0, 4, 22]);
        m.step();
        assert_eq!(positions(&m), [1, 5, 23]);

        // The same three presses unwind exactly, across the double-step.
        m.unstep();
        m.unstep();
        m.unstep();
        assert_eq!(positions(&m), [0, 3, 20]);
    }

    #[test]
    fn stepping_unwinds_over_plain_and_carried_presses() {
        // Trajectories that never park the middle rotor one past its notch
        // invert press for press.
        let cases: [([u8; 3], usize); 3] =
            [([0, 0, 0], 30), ([6, 12, 19], 26), ([25, 3, 8], 40)];
        for &(offsets, n) in &cases {
            let mut m = machine(
                [RotorId::I, RotorId::II, RotorId::III],
                [0, 0, 0],
                offsets,
                &[],
            );
            let start = positions(&m);
            for _ in 0..n {
                m.step();
            }
            for _ in 0..n {
                m.unstep();
            }
            assert_eq!(positions(&m), start, "offsets {:?}", offsets);
        }
    }

    #[test]
    fn plugboard_rejects_self_pairs() {
        assert_eq!(
            Plugboard::new(&[('A', 'A')]).unwrap_err(),
            EnigmaError::PlugboardSelfPair('A')
        );
    }

    #[test]
    fn plugboard_rejects_duplicate_letters() {
        assert_eq!(
            Plugboard::new(&[('A', 'B'), ('C', 'A')]).unwrap_err(),
            EnigmaError::PlugboardDuplicate('A')
        );
    }

    #[test]
    fn plugboard_rejects_lowercase() {
        assert_eq!(
            Plugboard::new(&[('a', 'B')]).unwrap_err(),
            EnigmaError::InvalidLetter('a')
        );
    }

    #[test]
    fn plugboard_pairs_are_canonical() {
        let board = Plugboard::new(&[('Z', 'D'), ('B', 'A')]).unwrap();
        assert_eq!(board.pairs(), vec![(0, 1), (3, 25)]);
        assert_eq!(board.to_string(), "AB DZ");
    }

    #[test]
    fn machine_rejects_repeated_rotors() {
        let key = EnigmaKey::new(
            Rotor::new(RotorId::I, 0, 0),
            Rotor::new(RotorId::I, 0, 0),
            Rotor::new(RotorId::III, 0, 0),
            ReflectorId::B,
            Plugboard::empty(),
        );
        assert!(matches!(
            EnigmaMachine::new(key),
            Err(EnigmaError::DuplicateRotor(RotorId::I))
        ));
    }
}
