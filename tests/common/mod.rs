use assert_cmd::Command;

pub fn frontsync_cmd() -> Command {
    let mut cmd = Command::cargo_bin("frontsync").unwrap();
    cmd.env_remove("FRONTSYNC_ROOT");
    cmd
}
