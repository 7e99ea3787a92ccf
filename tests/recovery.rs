//! End-to-end recovery of messages from known plaintext fragments.

use bombe::analysis::{self, fitness::UnigramFitness, SearchSpace};
use bombe::bombe::Bombe;
use bombe::enigma::{EnigmaKey, EnigmaMachine, Plugboard, ReflectorId, Rotor, RotorId};
use bombe::menu::{self, Menu};

// DEFENDTHEEASTWALLOFTHECASTLEATDAWNBEFORETHEENEMYAR encrypted under
// left I, middle II, right III, rings AAA, starts D/F/Y (fastest first),
// reflector B, no plugboard.
const PLAINTEXT: &str = "DEFENDTHEEASTWALLOFTHECASTLEATDAWNBEFORETHEENEMYAR";
const CIPHERTEXT: &str = "OFODJFXSBLEIPFGJNQAMCKKUTYHBUPCYSCHOJPFRLOGAQYXPOQ";
const CRIB: &str = "DEFEND";

const RINGS: [u8; 3] = [0, 0, 0];
const TRUE_STARTS: [u8; 3] = [3, 5, 24];

// The same message encrypted under starts A/H/X (fastest first). Its only
// usable crib, CASTLEATDAWN, sits 22 letters into the ciphertext, so the
// driver has to rewind every survivor from the pre-crib state back to the
// message start before decrypting.
const MID_CIPHERTEXT: &str = "ZSEMVOVWIHGDJVCGKJMNXVXSXCKBSXTTOAHUHBYAWBIWRMOBRF";
const MID_CRIB: &str = "CASTLEATDAWN";
const MID_STARTS: [u8; 3] = [0, 7, 23];

fn true_machine() -> EnigmaMachine {
    let key = EnigmaKey::new(
        Rotor::new(RotorId::I, RINGS[2], TRUE_STARTS[2]),
        Rotor::new(RotorId::II, RINGS[1], TRUE_STARTS[1]),
        Rotor::new(RotorId::III, RINGS[0], TRUE_STARTS[0]),
        ReflectorId::B,
        Plugboard::empty(),
    );
    EnigmaMachine::new(key).unwrap()
}

#[test]
fn the_instance_is_consistent() {
    let mut machine = true_machine();
    assert_eq!(machine.encrypt(PLAINTEXT), CIPHERTEXT);
}

#[test]
fn the_crib_menu_sits_at_the_message_start() {
    let (menu, paths) = analysis::choose_menu(CIPHERTEXT, &[CRIB]).unwrap();
    assert_eq!(menu.offset(), 0);
    assert_eq!(paths.len(), 3);

    let mut strings: Vec<String> = paths.iter().map(|p| menu::path_string(p)).collect();
    strings.sort();
    assert_eq!(strings, ["DEFD", "DEFOD", "DFOD"]);
}

#[test]
fn the_true_start_survives_its_bombe_cell() {
    let menu = Menu::new(CRIB, CIPHERTEXT, 0);
    let paths = menu::find_paths(&menu);

    let template = EnigmaKey::new(
        Rotor::new(RotorId::I, 0, 0),
        Rotor::new(RotorId::II, 0, 0),
        Rotor::new(RotorId::III, 0, 0),
        ReflectorId::B,
        Plugboard::empty(),
    );
    let machine = EnigmaMachine::new(template).unwrap();

    let possibilities = Bombe::new(machine, RINGS).run(&menu, &paths);

    // The message was sent unsteckered, so the true start must be filed
    // under the empty plugboard.
    let unsteckered = possibilities
        .get(&Vec::new())
        .expect("empty plugboard should have survivors");
    assert!(unsteckered.contains(&TRUE_STARTS));
}

#[test]
fn the_mid_message_instance_is_consistent() {
    let key = EnigmaKey::new(
        Rotor::new(RotorId::I, RINGS[2], MID_STARTS[2]),
        Rotor::new(RotorId::II, RINGS[1], MID_STARTS[1]),
        Rotor::new(RotorId::III, RINGS[0], MID_STARTS[0]),
        ReflectorId::B,
        Plugboard::empty(),
    );
    let mut machine = EnigmaMachine::new(key).unwrap();
    assert_eq!(machine.encrypt(PLAINTEXT), MID_CIPHERTEXT);
}

#[test]
fn the_mid_message_crib_menu_sits_past_the_start() {
    let (menu, paths) = analysis::choose_menu(MID_CIPHERTEXT, &[MID_CRIB]).unwrap();
    assert_eq!(menu.offset(), 22);
    assert_eq!(paths.len(), 2);
}

#[test]
fn the_driver_rewinds_survivors_to_the_message_start() {
    let space = SearchSpace {
        wheel_orders: vec![[RotorId::I, RotorId::II, RotorId::III]],
        reflectors: vec![ReflectorId::B],
        ring_settings: vec![RINGS],
    };

    let recovery =
        analysis::recover(MID_CIPHERTEXT, &[MID_CRIB], &space, &UnigramFitness::new()).unwrap();

    assert_eq!(recovery.plaintext, PLAINTEXT);

    // The winning key must describe the state before the first message
    // press, not the state before the crib: 22 presses upstream of it.
    assert_eq!(recovery.key.left_rotor().position(), 3);
    assert_eq!(recovery.key.middle_rotor().position(), 19);
    assert_eq!(recovery.key.right_rotor().position(), 0);
    assert!(recovery.key.plugboard().pairs().is_empty());
}

#[test]
fn the_driver_recovers_the_message() {
    let space = SearchSpace {
        wheel_orders: vec![[RotorId::I, RotorId::II, RotorId::III]],
        reflectors: vec![ReflectorId::B],
        ring_settings: vec![RINGS],
    };

    let recovery =
        analysis::recover(CIPHERTEXT, &[CRIB], &space, &UnigramFitness::new()).unwrap();

    assert_eq!(recovery.plaintext, PLAINTEXT);
    assert_eq!(recovery.key.left_rotor().id(), RotorId::I);
    assert_eq!(recovery.key.middle_rotor().id(), RotorId::II);
    assert_eq!(recovery.key.right_rotor().id(), RotorId::III);
    assert!(recovery.key.plugboard().pairs().is_empty());
}
