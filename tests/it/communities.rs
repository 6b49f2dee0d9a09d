use jackut::JackutError;

use super::helpers::*;

#[test]
fn test_create_and_describe_community() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");

    facade.create_community(&joao, "rust", "Crabs welcome").unwrap();
    assert_eq!(facade.get_community_description("rust").unwrap(), "Crabs welcome");
    assert_eq!(facade.get_community_owner("rust").unwrap(), "joao");
    assert_eq!(facade.get_community_members("rust").unwrap(), "{joao}");
    assert_eq!(facade.get_communities("joao").unwrap(), "{rust}");
    assert!(matches!(
        facade.create_community(&joao, "rust", "again"),
        Err(JackutError::CommunityAlreadyExists)
    ));
}

#[test]
fn test_join_community() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");
    let maria = signup_and_login(&mut facade, "maria", "Maria");

    facade.create_community(&joao, "rust", "").unwrap();
    facade.create_community(&maria, "java", "").unwrap();
    facade.join_community(&maria, "rust").unwrap();
    facade.join_community(&joao, "java").unwrap();

    assert_eq!(facade.get_community_members("rust").unwrap(), "{joao,maria}");
    assert_eq!(facade.get_communities("maria").unwrap(), "{java,rust}");
    assert_eq!(facade.get_communities("joao").unwrap(), "{rust,java}");
    assert!(matches!(facade.join_community(&maria, "rust"), Err(JackutError::UserAlreadyJoinedCommunity)));
}

#[test]
fn test_missing_community() {
    let (mut facade, _dir) = setup();
    let joao = signup_and_login(&mut facade, "joao", "Joao");

    assert!(matches!(facade.get_community_description("ghost"), Err(JackutError::CommunityNotExist)));
    assert!(matches!(facade.get_community_owner("ghost"), Err(JackutError::CommunityNotExist)));
    assert!(matches!(facade.get_community_members("ghost"), Err(JackutError::CommunityNotExist)));
    assert!(matches!(facade.join_community(&joao, "ghost"), Err(JackutError::CommunityNotExist)));
    assert!(matches!(facade.join_community("bogus", "ghost"), Err(JackutError::CommunityNotExist)));
    assert_eq!(facade.get_communities("joao").unwrap(), "{}");
}
