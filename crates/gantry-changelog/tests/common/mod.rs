//! Shared fixture history for integration tests
//!
//! A real project history: newest-first commits with their parent hashes,
//! and the release tags anchored to them.

use gantry_git::{Commit, Tag};

pub const AUTHOR: &str = "Commitizen";
pub const AUTHOR_EMAIL: &str = "author@cz.dev";

type RawCommit = (&'static str, &'static str, &'static str, &'static [&'static str]);

#[rustfmt::skip]
const HISTORY: &[RawCommit] = &[
    ("141ee441c9c9da0809c554103a558eb17c30ed17", "bump: version 1.1.1 → 1.2.0", "", &["6c4948501031b7d6405b54b21d3d635827f9421b"]),
    ("6c4948501031b7d6405b54b21d3d635827f9421b", "docs: how to create custom bumps", "", &["ddd220ad515502200fe2dde443614c1075d26238"]),
    ("ddd220ad515502200fe2dde443614c1075d26238", "feat: custom cz plugins now support bumping version", "", &["ad17acff2e3a2e141cbc3c6efd7705e4e6de9bfc"]),
    ("ad17acff2e3a2e141cbc3c6efd7705e4e6de9bfc", "docs: added bump gif", "", &["56c8a8da84e42b526bcbe130bd194306f7c7e813"]),
    ("56c8a8da84e42b526bcbe130bd194306f7c7e813", "bump: version 1.1.0 → 1.1.1", "", &["74c6134b1b2e6bb8b07ed53410faabe99b204f36"]),
    ("74c6134b1b2e6bb8b07ed53410faabe99b204f36", "refactor: changed stdout statements", "", &["cbc7b5f22c4e74deff4bc92d14e19bd93524711e"]),
    ("cbc7b5f22c4e74deff4bc92d14e19bd93524711e", "fix(bump): commit message now fits better with semver", "", &["1ba46f2a63cb9d6e7472eaece21528c8cd28b118"]),
    ("1ba46f2a63cb9d6e7472eaece21528c8cd28b118", "fix: conventional commit 'breaking change' in body instead of title", "closes #16", &["c35dbffd1bb98bb0b3d1593797e79d1c3366af8f"]),
    ("c35dbffd1bb98bb0b3d1593797e79d1c3366af8f", "refactor(schema): command logic removed from commitizen base", "", &["25313397a4ac3dc5b5c986017bee2a614399509d"]),
    ("25313397a4ac3dc5b5c986017bee2a614399509d", "refactor(info): command logic removed from commitizen base", "", &["d2f13ac41b4e48995b3b619d931c82451886e6ff"]),
    ("d2f13ac41b4e48995b3b619d931c82451886e6ff", "refactor(example): command logic removed from commitizen base", "", &["d839e317e5b26671b010584ad8cc6bf362400fa1"]),
    ("d839e317e5b26671b010584ad8cc6bf362400fa1", "refactor(commit): moved most of the commit logic to the commit command", "", &["12d0e65beda969f7983c444ceedc2a01584f4e08"]),
    ("12d0e65beda969f7983c444ceedc2a01584f4e08", "docs(README): updated documentation url)", "", &["fb4c85abe51c228e50773e424cbd885a8b6c610d"]),
    ("fb4c85abe51c228e50773e424cbd885a8b6c610d", "docs: mkdocs documentation", "", &["17efb44d2cd16f6621413691a543e467c7d2dda6"]),
    ("17efb44d2cd16f6621413691a543e467c7d2dda6", "Bump version 1.0.0 → 1.1.0", "", &["6012d9eecfce8163d75c8fff179788e9ad5347da"]),
    ("6012d9eecfce8163d75c8fff179788e9ad5347da", "test: fixed issues with conf", "", &["0c7fb0ca0168864dfc55d83c210da57771a18319"]),
    ("0c7fb0ca0168864dfc55d83c210da57771a18319", "docs(README): some new information about bump", "", &["cb1dd2019d522644da5bdc2594dd6dee17122d7f"]),
    ("cb1dd2019d522644da5bdc2594dd6dee17122d7f", "feat: new working bump command", "", &["9c7450f85df6bf6be508e79abf00855a30c3c73c"]),
    ("9c7450f85df6bf6be508e79abf00855a30c3c73c", "feat: create version tag", "", &["9f3af3772baab167e3fd8775d37f041440184251"]),
    ("9f3af3772baab167e3fd8775d37f041440184251", "docs: added new changelog", "", &["b0d6a3defbfde14e676e7eb34946409297d0221b"]),
    ("b0d6a3defbfde14e676e7eb34946409297d0221b", "feat: update given files with new version", "", &["d630d07d912e420f0880551f3ac94e933f9d3beb"]),
    ("d630d07d912e420f0880551f3ac94e933f9d3beb", "fix: removed all from commit", "", &["1792b8980c58787906dbe6836f93f31971b1ec2d"]),
    ("1792b8980c58787906dbe6836f93f31971b1ec2d", "feat(config): new set key, used to set version to cfg", "", &["52def1ea3555185ba4b936b463311949907e31ec"]),
    ("52def1ea3555185ba4b936b463311949907e31ec", "feat: support for pyproject.toml", "", &["3127e05077288a5e2b62893345590bf1096141b7"]),
    ("3127e05077288a5e2b62893345590bf1096141b7", "feat: first semantic version bump implementation", "", &["fd480ed90a80a6ffa540549408403d5b60d0e90c"]),
    ("fd480ed90a80a6ffa540549408403d5b60d0e90c", "fix: fix config file not working", "", &["e4840a059731c0bf488381ffc77e989e85dd81ad"]),
    ("e4840a059731c0bf488381ffc77e989e85dd81ad", "refactor: added commands folder, better integration with decli", "", &["aa44a92d68014d0da98965c0c2cb8c07957d4362"]),
    ("aa44a92d68014d0da98965c0c2cb8c07957d4362", "Bump version: 1.0.0b2 → 1.0.0", "", &["58bb709765380dbd46b74ce6e8978515764eb955"]),
    ("58bb709765380dbd46b74ce6e8978515764eb955", "docs(README): new badges", "", &["97afb0bb48e72b6feca793091a8a23c706693257"]),
    ("97afb0bb48e72b6feca793091a8a23c706693257", "Merge pull request #10 from Woile/feat/decli", "Feat/decli", &["9cecb9224aa7fa68d4afeac37eba2a25770ef251", "e004a90b81ea5b374f118759bce5951202d03d69"]),
    ("9cecb9224aa7fa68d4afeac37eba2a25770ef251", "style: black to files", "", &["f5781d1a2954d71c14ade2a6a1a95b91310b2577"]),
    ("f5781d1a2954d71c14ade2a6a1a95b91310b2577", "ci: added travis", "", &["80105fb3c6d45369bc0cbf787bd329fba603864c"]),
    ("80105fb3c6d45369bc0cbf787bd329fba603864c", "refactor: removed delegator, added decli and many tests", "BREAKING CHANGE: API is stable", &["a96008496ffefb6b1dd9b251cb479eac6a0487f7"]),
    ("a96008496ffefb6b1dd9b251cb479eac6a0487f7", "docs: updated test command", "", &["aab33d13110f26604fb786878856ec0b9e5fc32b"]),
    ("aab33d13110f26604fb786878856ec0b9e5fc32b", "Bump version: 1.0.0b1 → 1.0.0b2", "", &["b73791563d2f218806786090fb49ef70faa51a3a"]),
    ("b73791563d2f218806786090fb49ef70faa51a3a", "docs(README): updated to reflect current state", "", &["7aa06a454fb717408b3657faa590731fb4ab3719"]),
    ("7aa06a454fb717408b3657faa590731fb4ab3719", "Merge pull request #9 from Woile/dev", "feat: py3 only, tests and conventional commits 1.0", &["7c7e96b723c2aaa1aec3a52561f680adf0b60e97", "9589a65880016996cff156b920472b9d28d771ca"]),
    ("7c7e96b723c2aaa1aec3a52561f680adf0b60e97", "Bump version: 0.9.11 → 1.0.0b1", "", &["ed830019581c83ba633bfd734720e6758eca6061"]),
    ("ed830019581c83ba633bfd734720e6758eca6061", "feat: py3 only, tests and conventional commits 1.0", "more tests\npyproject instead of Pipfile\nquestionary instead of whaaaaat (promptkit 2.0.0 support)", &["c52eca6f74f844ab3ffbde61d98ef96071e132b7"]),
    ("c52eca6f74f844ab3ffbde61d98ef96071e132b7", "Bump version: 0.9.10 → 0.9.11", "", &["0326652b2657083929507ee66d4d1a0899e861ba"]),
    ("0326652b2657083929507ee66d4d1a0899e861ba", "fix(config): load config reads in order without failing if there is no commitizen section", "Closes #8", &["b3f89892222340150e32631ae6b7aab65230036f"]),
    ("b3f89892222340150e32631ae6b7aab65230036f", "Bump version: 0.9.9 → 0.9.10", "", &["5e837bf8ef0735193597372cd2d85e31a8f715b9"]),
    ("5e837bf8ef0735193597372cd2d85e31a8f715b9", "fix: parse scope (this is my punishment for not having tests)", "", &["684e0259cc95c7c5e94854608cd3dcebbd53219e"]),
    ("684e0259cc95c7c5e94854608cd3dcebbd53219e", "Bump version: 0.9.8 → 0.9.9", "", &["ca38eac6ff09870851b5c76a6ff0a2a8e5ecda15"]),
    ("ca38eac6ff09870851b5c76a6ff0a2a8e5ecda15", "fix: parse scope empty", "", &["64168f18d4628718c49689ee16430549e96c5d4b"]),
    ("64168f18d4628718c49689ee16430549e96c5d4b", "Bump version: 0.9.7 → 0.9.8", "", &["9d4def716ef235a1fa5ae61614366423fbc8256f"]),
    ("9d4def716ef235a1fa5ae61614366423fbc8256f", "fix(scope): parse correctly again", "", &["33b0bf1a0a4dc60aac45ed47476d2e5473add09e"]),
    ("33b0bf1a0a4dc60aac45ed47476d2e5473add09e", "Bump version: 0.9.6 → 0.9.7", "", &["696885e891ec35775daeb5fec3ba2ab92c2629e1"]),
    ("696885e891ec35775daeb5fec3ba2ab92c2629e1", "fix(scope): parse correctly", "", &["bef4a86761a3bda309c962bae5d22ce9b57119e4"]),
    ("bef4a86761a3bda309c962bae5d22ce9b57119e4", "Bump version: 0.9.5 → 0.9.6", "", &["72472efb80f08ee3fd844660afa012c8cb256e4b"]),
    ("72472efb80f08ee3fd844660afa012c8cb256e4b", "refactor(conventionalCommit): moved filters to questions instead of message", "", &["b5561ce0ab3b56bb87712c8f90bcf37cf2474f1b"]),
    ("b5561ce0ab3b56bb87712c8f90bcf37cf2474f1b", "fix(manifest): included missing files", "", &["3e31714dc737029d96898f412e4ecd2be1bcd0ce"]),
    ("3e31714dc737029d96898f412e4ecd2be1bcd0ce", "Bump version: 0.9.4 → 0.9.5", "", &["9df721e06595fdd216884c36a28770438b4f4a39"]),
    ("9df721e06595fdd216884c36a28770438b4f4a39", "fix(config): home path for python versions between 3.0 and 3.5", "", &["0cf6ada372470c8d09e6c9e68ebf94bbd5a1656f"]),
    ("0cf6ada372470c8d09e6c9e68ebf94bbd5a1656f", "Bump version: 0.9.3 → 0.9.4", "", &["973c6b3e100f6f69a3fe48bd8ee55c135b96c318"]),
    ("973c6b3e100f6f69a3fe48bd8ee55c135b96c318", "feat(cli): added version", "", &["dacc86159b260ee98eb5f57941c99ba731a01399"]),
    ("dacc86159b260ee98eb5f57941c99ba731a01399", "Bump version: 0.9.2 → 0.9.3", "", &["4368f3c3cbfd4a1ced339212230d854bc5bab496"]),
    ("4368f3c3cbfd4a1ced339212230d854bc5bab496", "feat(committer): conventional commit is a bit more intelligent now", "", &["da94133288727d35dae9b91866a25045038f2d38"]),
    ("da94133288727d35dae9b91866a25045038f2d38", "docs(README): motivation", "", &["1541f54503d2e1cf39bd777c0ca5ab5eb78772ba"]),
    ("1541f54503d2e1cf39bd777c0ca5ab5eb78772ba", "Bump version: 0.9.1 → 0.9.2", "", &["ddc855a637b7879108308b8dbd85a0fd27c7e0e7"]),
    ("ddc855a637b7879108308b8dbd85a0fd27c7e0e7", "refactor: renamed conventional_changelog to conventional_commits, not backward compatible", "", &["46e9032e18a819e466618c7a014bcb0e9981af9e"]),
    ("46e9032e18a819e466618c7a014bcb0e9981af9e", "Bump version: 0.9.0 → 0.9.1", "", &["0fef73cd7dc77a25b82e197e7c1d3144a58c1350"]),
    ("0fef73cd7dc77a25b82e197e7c1d3144a58c1350", "fix(setup.py): future is now required for every python version", "", &[]),
];

#[rustfmt::skip]
const TAGS: &[(&str, &str, &str)] = &[
    ("v1.2.0", "141ee441c9c9da0809c554103a558eb17c30ed17", "2019-04-19"),
    ("v1.1.1", "56c8a8da84e42b526bcbe130bd194306f7c7e813", "2019-04-18"),
    ("v1.1.0", "17efb44d2cd16f6621413691a543e467c7d2dda6", "2019-04-14"),
    ("v1.0.0", "aa44a92d68014d0da98965c0c2cb8c07957d4362", "2019-03-01"),
    ("1.0.0b2", "aab33d13110f26604fb786878856ec0b9e5fc32b", "2019-01-18"),
    ("v1.0.0b1", "7c7e96b723c2aaa1aec3a52561f680adf0b60e97", "2019-01-17"),
    ("v0.9.11", "c52eca6f74f844ab3ffbde61d98ef96071e132b7", "2018-12-17"),
    ("v0.9.10", "b3f89892222340150e32631ae6b7aab65230036f", "2018-09-22"),
    ("v0.9.9", "684e0259cc95c7c5e94854608cd3dcebbd53219e", "2018-09-22"),
    ("v0.9.8", "64168f18d4628718c49689ee16430549e96c5d4b", "2018-09-22"),
    ("v0.9.7", "33b0bf1a0a4dc60aac45ed47476d2e5473add09e", "2018-09-22"),
    ("v0.9.6", "bef4a86761a3bda309c962bae5d22ce9b57119e4", "2018-09-19"),
    ("v0.9.5", "3e31714dc737029d96898f412e4ecd2be1bcd0ce", "2018-08-24"),
    ("v0.9.4", "0cf6ada372470c8d09e6c9e68ebf94bbd5a1656f", "2018-08-02"),
    ("v0.9.3", "dacc86159b260ee98eb5f57941c99ba731a01399", "2018-07-28"),
    ("v0.9.2", "1541f54503d2e1cf39bd777c0ca5ab5eb78772ba", "2017-11-11"),
    ("v0.9.1", "46e9032e18a819e466618c7a014bcb0e9981af9e", "2017-11-11"),
];

pub fn fixture_commits() -> Vec<Commit> {
    HISTORY
        .iter()
        .map(|(rev, title, body, parents)| {
            Commit::new(*rev, *title, AUTHOR, AUTHOR_EMAIL)
                .with_body(*body)
                .with_parents(parents.iter().copied())
        })
        .collect()
}

pub fn fixture_tags() -> Vec<Tag> {
    TAGS.iter()
        .map(|(name, rev, date)| Tag::new(*name, *rev, *date))
        .collect()
}
