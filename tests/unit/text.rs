use super::*;

#[test]
fn whole_block_is_one_handle() {
    let handles = WholeBlockSplitter.split("Lyon, ville lumière");
    assert_eq!(
        handles,
        vec![DisplayHandle {
            index: 0,
            text: "Lyon, ville lumière".into()
        }]
    );
}

#[test]
fn empty_text_has_no_handles() {
    assert!(WholeBlockSplitter.split("").is_empty());
}

#[test]
fn usable_as_trait_object() {
    let s: &dyn TextSplitter = &WholeBlockSplitter;
    assert_eq!(s.split("a b").len(), 1);
}
