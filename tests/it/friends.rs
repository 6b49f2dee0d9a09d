use jackut::JackutError;

use super::helpers::*;

#[test]
fn test_friendship_is_confirmed_by_reciprocation() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.add_friend(&joao, "maria").unwrap();
    assert!(!facade.is_friend("joao", "maria").unwrap());
    assert!(!facade.is_friend("maria", "joao").unwrap());

    facade.add_friend(&maria, "joao").unwrap();
    assert!(facade.is_friend("joao", "maria").unwrap());
    assert!(facade.is_friend("maria", "joao").unwrap());
    assert_eq!(facade.get_friends("joao").unwrap(), "{maria}");
    assert_eq!(facade.get_friends("maria").unwrap(), "{joao}");
}

#[test]
fn test_friend_request_errors() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    assert!(matches!(facade.add_friend(&joao, "joao"), Err(JackutError::YourselfFriendRequest)));
    assert!(matches!(facade.add_friend(&joao, "ghost"), Err(JackutError::UserNotRegistered)));
    assert!(matches!(facade.add_friend("bogus", "maria"), Err(JackutError::UserNotRegistered)));

    facade.add_friend(&joao, "maria").unwrap();
    assert!(matches!(facade.add_friend(&joao, "maria"), Err(JackutError::FriendRequestAlreadySent)));

    facade.add_friend(&maria, "joao").unwrap();
    assert!(matches!(facade.add_friend(&joao, "maria"), Err(JackutError::UserAlreadyAdded)));
}

#[test]
fn test_friend_listing_order() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");
    let pedro = signup_and_login(&mut facade, "pedro", "Pedro");

    assert_eq!(facade.get_friends("joao").unwrap(), "{}");
    facade.add_friend(&joao, "pedro").unwrap();
    facade.add_friend(&joao, "maria").unwrap();
    facade.add_friend(&maria, "joao").unwrap();
    facade.add_friend(&pedro, "joao").unwrap();
    assert_eq!(facade.get_friends("joao").unwrap(), "{maria,pedro}");
    assert!(matches!(facade.is_friend("joao", "ghost"), Err(JackutError::UserNotRegistered)));
}
