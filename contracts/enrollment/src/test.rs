extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::types::{Student, StudentAssigned};
use crate::{Enrollment, EnrollmentClient, Error, GROUP_COUNT};

fn setup() -> (Env, EnrollmentClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(Enrollment, ());
    let client = EnrollmentClient::new(&env, &contract_id);
    (env, client)
}

#[test]
fn test_assigns_a_student_to_a_group() {
    let (env, client) = setup();
    let caller = Address::generate(&env);

    let group = client.assign_to_group(&caller, &String::from_str(&env, "Alice"), &20);
    assert!(group < GROUP_COUNT, "group number is out of range");
    assert_eq!(client.student_count(), 1);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("no events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("assigned").into_val(&env),
        group.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: StudentAssigned = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, StudentAssigned { group });
}

#[test]
fn test_round_robin_assignment() {
    let (env, client) = setup();
    let caller = Address::generate(&env);

    for i in 0..(GROUP_COUNT + 1) {
        let group =
            client.assign_to_group(&caller, &String::from_str(&env, "student"), &(18 + i));
        assert_eq!(group, i % GROUP_COUNT);
    }
    // The sixth student wrapped around into the first group.
    assert_eq!(client.get_students(&0).len(), 2);
    assert_eq!(client.student_count(), (GROUP_COUNT + 1) as u64);
}

#[test]
fn test_retrieves_students_from_a_group() {
    let (env, client) = setup();
    let caller = Address::generate(&env);
    let name = String::from_str(&env, "Bob");

    let group = client.assign_to_group(&caller, &name, &21);
    let students = client.get_students(&group);

    assert_eq!(students.len(), 1);
    assert_eq!(
        students.get(0).unwrap(),
        Student {
            name: name.clone(),
            age: 21,
        }
    );

    // Untouched groups are empty, not missing.
    let empty = client.get_students(&((group + 1) % GROUP_COUNT));
    assert_eq!(empty.len(), 0);
}

#[test]
fn test_rejects_nonexistent_group() {
    let (_env, client) = setup();
    assert_eq!(
        client.try_get_students(&GROUP_COUNT),
        Err(Ok(Error::InvalidGroup))
    );
    assert_eq!(client.try_get_students(&6), Err(Ok(Error::InvalidGroup)));
}

#[test]
fn test_rejects_bad_student_data() {
    let (env, client) = setup();
    let caller = Address::generate(&env);

    assert_eq!(
        client.try_assign_to_group(&caller, &String::from_str(&env, ""), &20),
        Err(Ok(Error::InvalidArgument))
    );
    assert_eq!(
        client.try_assign_to_group(&caller, &String::from_str(&env, "Carol"), &0),
        Err(Ok(Error::InvalidArgument))
    );
    assert_eq!(client.student_count(), 0);
}
