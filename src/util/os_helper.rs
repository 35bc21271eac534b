/// Real name of the OS user, or the login name when it isn't set
pub fn current_user_name() -> String {
    let name = whoami::realname();
    if name.trim().is_empty() {
        return whoami::username();
    }
    name
}
