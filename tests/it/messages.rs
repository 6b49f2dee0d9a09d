use jackut::JackutError;

use super::helpers::*;

#[test]
fn test_messages_are_read_in_order() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.send_message(&joao, "maria", "Bom dia").unwrap();
    facade.send_message(&joao, "maria", "Tudo bem?").unwrap();
    assert_eq!(facade.read_message(&maria).unwrap(), "Bom dia");
    assert_eq!(facade.read_message(&maria).unwrap(), "Tudo bem?");
    assert!(matches!(facade.read_message(&maria), Err(JackutError::NoMessage)));
}

#[test]
fn test_message_errors() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");

    assert!(matches!(facade.read_message(&joao), Err(JackutError::NoMessage)));
    assert!(matches!(facade.send_message(&joao, "joao", "eu"), Err(JackutError::YourselfMessage)));
    assert!(matches!(facade.send_message(&joao, "ghost", "oi"), Err(JackutError::UserNotRegistered)));
    assert!(matches!(facade.send_message("bogus", "joao", "oi"), Err(JackutError::UserNotRegistered)));
}

#[test]
fn test_community_messages_are_separate_from_private_ones() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.create_community(&joao, "rust", "Crabs welcome").unwrap();
    facade.join_community(&maria, "rust").unwrap();
    facade.send_message(&joao, "maria", "private").unwrap();
    facade.send_community_message(&joao, "rust", "public").unwrap();

    assert_eq!(facade.read_community_message(&maria).unwrap(), "public");
    assert_eq!(facade.read_community_message(&joao).unwrap(), "public");
    assert_eq!(facade.read_message(&maria).unwrap(), "private");
    assert!(matches!(facade.read_community_message(&maria), Err(JackutError::NoCommunityMessage)));
    assert!(matches!(
        facade.send_community_message(&joao, "ghost", "x"),
        Err(JackutError::CommunityNotExist)
    ));
}
