#![expect(missing_docs)]

use containers::{Container, ContainerError, List, MutableContainer, Tuple};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn drain<C>(container: &mut C, values: &[u32]) -> Vec<Result<u32, ContainerError>>
where
    C: MutableContainer<u32>,
{
    values
        .iter()
        .map(|value| container.remove(value))
        .collect()
}

#[test]
fn append_then_query() {
    init_logging();

    let mut list = List::new();
    list.append(1);
    list.append(5);

    assert!(list.contains(&5));
    assert!(!list.contains(&3));
    assert_eq!(list.to_string(), "[1, 5]");
    assert!(list.print().is_ok());
}

#[test]
fn list_and_vec_agree_through_traits() {
    init_logging();

    let mut list = List::from(vec![7, 8, 9, 8]);
    let mut vec = vec![7, 8, 9, 8];

    let from_list = drain(&mut list, &[8, 1, 7, 8, 8]);
    let from_vec = drain(&mut vec, &[8, 1, 7, 8, 8]);

    assert_eq!(from_list, from_vec);
    assert_eq!(
        from_list,
        [
            Ok(8),
            Err(ContainerError::ElementNotFound),
            Ok(7),
            Ok(8),
            Err(ContainerError::ElementNotFound),
        ]
    );

    assert_eq!(Container::len(&list), 1);
    assert_eq!(list.to_vec(), vec);
}

#[test]
fn tuple_scenario() {
    init_logging();

    let tuple = Tuple::from([10, 20, 30]);

    assert_eq!(tuple.count(), 3);
    assert_eq!(tuple.index(&20), Some(1));
    assert_eq!(tuple.index(&99), None);
    assert_eq!(
        Container::get(&tuple, 5),
        Err(ContainerError::IndexOutOfRange { index: 5, len: 3 })
    );
}

#[test]
fn errors_render_for_users() {
    let mut list = List::<&str>::new();

    let err = list.remove(&"missing").unwrap_err();
    assert_eq!(err.to_string(), "element not found");

    let err = list.get(0).unwrap_err();
    assert_eq!(err.to_string(), "index out of range: the len is 0 but the index is 0");
}
