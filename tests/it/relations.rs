use jackut::JackutError;

use super::helpers::*;

#[test]
fn test_fans_and_idols() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let pedro = signup_and_login(&mut facade, "pedro", "Pedro");
    signup_and_login(&mut facade, "maria", "Maria");

    facade.add_idol(&joao, "maria").unwrap();
    facade.add_idol(&pedro, "maria").unwrap();
    assert!(facade.is_fan("joao", "maria").unwrap());
    assert!(!facade.is_fan("maria", "joao").unwrap());
    assert_eq!(facade.get_fans("maria").unwrap(), "{joao,pedro}");
    assert_eq!(facade.get_fans("joao").unwrap(), "{}");
    assert!(matches!(facade.add_idol(&joao, "maria"), Err(JackutError::UserAlreadyIdol)));
    assert!(matches!(facade.add_idol(&joao, "joao"), Err(JackutError::YourselfFan)));
}

#[test]
fn test_mutual_crush_leaves_notes() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.add_crush(&joao, "maria").unwrap();
    assert!(facade.is_crush(&joao, "maria").unwrap());
    assert!(!facade.is_crush(&maria, "joao").unwrap());
    assert!(matches!(facade.read_message(&maria), Err(JackutError::NoMessage)));

    facade.add_crush(&maria, "joao").unwrap();
    assert_eq!(facade.get_crushes(&joao).unwrap(), "{maria}");
    assert_eq!(facade.read_message(&joao).unwrap(), "Maria is your crush - Jackut note.");
    assert_eq!(facade.read_message(&maria).unwrap(), "Joao is your crush - Jackut note.");

    assert!(matches!(facade.add_crush(&joao, "maria"), Err(JackutError::CrushAlreadyAdded)));
    assert!(matches!(facade.add_crush(&joao, "joao"), Err(JackutError::YourselfCrush)));
}

#[test]
fn test_enemies_block_interaction() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.add_enemy(&maria, "joao").unwrap();
    assert!(matches!(facade.add_enemy(&maria, "joao"), Err(JackutError::EnemyAlreadyDeclared)));
    assert!(matches!(facade.add_enemy(&maria, "maria"), Err(JackutError::YourselfEnemy)));

    let blocked = [
        facade.add_friend(&joao, "maria"),
        facade.add_idol(&joao, "maria"),
        facade.add_crush(&joao, "maria"),
        facade.send_message(&joao, "maria", "please"),
    ];
    for result in blocked {
        let err = result.unwrap_err();
        assert!(matches!(err, JackutError::EnemyFunction { .. }));
        assert_eq!(err.to_string(), "Invalid operation: Maria is your enemy.");
    }

    facade.send_message(&maria, "joao", "stay away").unwrap();
    assert_eq!(facade.read_message(&joao).unwrap(), "stay away");
}
