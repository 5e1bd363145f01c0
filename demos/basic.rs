use aclgen::{PolicyBuilder, generators};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let policy = PolicyBuilder::new()
        .filter(|f| {
            f.target("hpcomware edge advanced auto")
                .target("huawei edge")
                .comment("edge ingress")
                .term("dns", |t| {
                    t.source_address("192.168.1.0/24".parse().unwrap())
                        .destination_address("8.8.4.4/32".parse().unwrap())
                        .destination_address("8.8.8.8/32".parse().unwrap())
                        .destination_port(53)
                        .protocol("tcp")
                        .protocol("udp")
                        .action("accept")
                })
                .term("block_telnet", |t| {
                    t.destination_address("10.0.0.0/8".parse().unwrap())
                        .destination_port(23)
                        .protocol("tcp")
                        .action("deny")
                })
        })
        .build()
        .expect("failed to build policy");

    for (name, generator) in generators() {
        match generator.translate(&policy, 2) {
            Ok(translation) => {
                println!("# {name}{} ({} rules)", generator.suffix(), translation.rule_count());
                println!("{translation}\n");
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
}
