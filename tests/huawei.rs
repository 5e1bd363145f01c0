use aclgen::{GenerateError, Generator, Policy, PolicyBuilder};

const EXP_INFO: u32 = 2;

fn good_policy(target: &str) -> Policy {
    PolicyBuilder::new()
        .filter(|f| {
            f.target(target).comment("foooad bar").term("foo", |t| {
                t.source_address("192.168.1.1/32".parse().unwrap())
                    .source_address("192.168.1.2/32".parse().unwrap())
                    .destination_address("8.8.4.4/32".parse().unwrap())
                    .destination_address("8.8.8.8/32".parse().unwrap())
                    .destination_port(53)
                    .protocol("tcp")
                    .action("accept")
            })
        })
        .build()
        .unwrap()
}

#[test]
fn huawei_golden_output() {
    let expect = "undo acl name foo
acl name foo advance
description foooad bar
step 10
permit tcp source 192.168.1.1 32 destination 8.8.4.4 32 destination-port eq 53
permit tcp source 192.168.1.1 32 destination 8.8.8.8 32 destination-port eq 53
permit tcp source 192.168.1.2 32 destination 8.8.4.4 32 destination-port eq 53
permit tcp source 192.168.1.2 32 destination 8.8.8.8 32 destination-port eq 53";

    let policy = good_policy("huawei foo");
    let acl = Generator::huawei().generate(&policy, EXP_INFO).unwrap();
    assert_eq!(acl, expect);
}

#[test]
fn numbered_filter_resets_by_number() {
    let policy = good_policy("huawei 3001");
    let acl = Generator::huawei().generate(&policy, EXP_INFO).unwrap();
    assert!(acl.starts_with("undo acl 3001\nacl 3001\ndescription foooad bar\nstep 10\n"));
}

#[test]
fn full_port_range_is_omitted() {
    let policy = PolicyBuilder::new()
        .filter(|f| {
            f.target("huawei foo").term("t", |t| {
                t.source_address("10.0.0.1/32".parse().unwrap())
                    .source_port((0, 65535))
                    .destination_address("10.0.0.2/32".parse().unwrap())
                    .protocol("udp")
                    .action("accept")
            })
        })
        .build()
        .unwrap();
    let acl = Generator::huawei().generate(&policy, EXP_INFO).unwrap();
    let rule = acl.lines().last().unwrap();
    assert_eq!(rule, "permit udp source 10.0.0.1 32 destination 10.0.0.2 32");
    assert!(!rule.contains("range 0 65535"));
    assert!(!rule.contains(" eq "));
}

#[test]
fn partial_range_is_rendered() {
    let policy = PolicyBuilder::new()
        .filter(|f| {
            f.target("huawei foo").term("t", |t| {
                t.source_address("10.0.0.1/32".parse().unwrap())
                    .source_port((1, 65535))
                    .destination_address("10.0.0.0/30".parse().unwrap())
                    .destination_port(22)
                    .protocol("tcp")
                    .action("deny")
            })
        })
        .build()
        .unwrap();
    let acl = Generator::huawei().generate(&policy, EXP_INFO).unwrap();
    assert_eq!(
        acl.lines().last(),
        Some("deny tcp source 10.0.0.1 32 source-port range 1 65535 destination 10.0.0.0 255.255.255.252 destination-port eq 22")
    );
}

#[test]
fn unmapped_action_passes_through() {
    let policy = PolicyBuilder::new()
        .filter(|f| {
            f.target("huawei foo")
                .term("t", |t| {
                    t.destination_address("10.0.0.2/32".parse().unwrap())
                        .protocol("icmp")
                        .action("reject")
                })
        })
        .build()
        .unwrap();
    let acl = Generator::huawei().generate(&policy, EXP_INFO).unwrap();
    assert_eq!(
        acl.lines().last(),
        Some("reject icmp source any destination 10.0.0.2 32")
    );
}

#[test]
fn name_limits() {
    let at_limit = good_policy(&format!("huawei {}", "h".repeat(127)));
    assert!(Generator::huawei().generate(&at_limit, EXP_INFO).is_ok());

    let over = good_policy(&format!("huawei {}", "h".repeat(128)));
    assert!(matches!(
        Generator::huawei().generate(&over, EXP_INFO),
        Err(GenerateError::FilterNameLength { len: 128, max: 127, .. })
    ));
}

#[test]
fn comware_length_limit_does_not_apply() {
    let policy = good_policy(&format!("huawei {}", "h".repeat(100)));
    assert!(Generator::huawei().generate(&policy, EXP_INFO).is_ok());
}
