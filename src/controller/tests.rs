use super::*;
use crate::library::VideoLibrary;
use crate::playback::PlaybackState;

fn controller() -> CommandController<VideoLibrary> {
    let catalog = VideoLibrary::from_videos([
        Video::new("v1", "Amazing Cat Video", vec!["#cat".into(), "#funny".into()]),
        Video::new("v2", "Another Cat Video", vec!["#cat".into()]),
        Video::new("d1", "Funny Dogs", vec!["#dog".into(), "#animal".into()]),
        Video::new("nothing", "Video about nothing", Vec::new()),
    ]);
    CommandController::with_seed(catalog, 42)
}

#[test]
fn counts_and_lists_catalog_sorted_by_title() {
    let mut ctl = controller();
    assert_eq!(ctl.number_of_videos(), ["4 videos in the library"]);

    ctl.flag_video("d1", Some("dont_like_dogs"));
    assert_eq!(
        ctl.show_all_videos(),
        [
            "Here's a list of all available videos:",
            "Amazing Cat Video (v1) [#cat #funny]",
            "Another Cat Video (v2) [#cat]",
            "Funny Dogs (d1) [#dog #animal] - FLAGGED (reason: dont_like_dogs)",
            "Video about nothing (nothing) []",
        ]
    );
}

#[test]
fn play_reports_stop_before_play() {
    let mut ctl = controller();
    assert_eq!(ctl.play("v1"), ["Playing video: Amazing Cat Video"]);
    assert_eq!(
        ctl.play("v2"),
        [
            "Stopping video: Amazing Cat Video",
            "Playing video: Another Cat Video",
        ]
    );
    assert_eq!(ctl.play("missing"), ["Cannot play video: Video does not exist"]);
    // failed play keeps the current video
    assert_eq!(
        ctl.show_playing(),
        ["Currently playing: Another Cat Video (v2) [#cat]"]
    );
}

#[test]
fn pause_continue_and_stop_messages() {
    let mut ctl = controller();
    assert_eq!(ctl.pause(), ["Cannot pause video: No video is currently playing"]);
    assert_eq!(
        ctl.continue_video(),
        ["Cannot continue video: No video is currently playing"]
    );
    assert_eq!(ctl.stop(), ["Cannot stop video: No video is currently playing"]);
    assert_eq!(ctl.show_playing(), ["No video is currently playing"]);

    ctl.play("d1");
    assert_eq!(ctl.continue_video(), ["Cannot continue video: Video is not paused"]);
    assert_eq!(ctl.pause(), ["Pausing video: Funny Dogs"]);
    assert_eq!(ctl.pause(), ["Video already paused: Funny Dogs"]);
    assert_eq!(
        ctl.show_playing(),
        ["Currently playing: Funny Dogs (d1) [#dog #animal] - PAUSED"]
    );
    assert_eq!(ctl.continue_video(), ["Continuing video: Funny Dogs"]);
    assert_eq!(ctl.stop(), ["Stopping video: Funny Dogs"]);
    assert_eq!(ctl.session().state(), &PlaybackState::Idle);
}

#[test]
fn random_play_when_everything_is_flagged() {
    let mut ctl = controller();
    for id in ["v1", "v2", "d1", "nothing"] {
        ctl.flag_video(id, None);
    }
    assert_eq!(ctl.play_random(), ["No videos available"]);
    assert_eq!(ctl.session().state(), &PlaybackState::Idle);

    ctl.allow_video("nothing");
    assert_eq!(ctl.play_random(), ["Playing video: Video about nothing"]);
}

#[test]
fn flagging_playing_video_stops_it() {
    let mut ctl = controller();
    ctl.play("v1");

    assert_eq!(
        ctl.flag_video("v1", Some("spoilers")),
        [
            "Stopping video: Amazing Cat Video",
            "Successfully flagged video: Amazing Cat Video (reason: spoilers)",
        ]
    );
    assert_eq!(ctl.session().state(), &PlaybackState::Idle);
    assert_eq!(
        ctl.play("v1"),
        ["Cannot play video: Video is currently flagged (reason: spoilers)"]
    );
}

#[test]
fn flagging_paused_video_stops_it() {
    let mut ctl = controller();
    ctl.play("v2");
    ctl.pause();

    let reply = ctl.flag_video("v2", None);
    assert_eq!(reply[0], "Stopping video: Another Cat Video");
    assert_eq!(
        reply[1],
        "Successfully flagged video: Another Cat Video (reason: Not supplied)"
    );
    assert_eq!(ctl.show_playing(), ["No video is currently playing"]);
}

#[test]
fn flagging_other_video_leaves_playback_alone() {
    let mut ctl = controller();
    ctl.play("v2");
    assert_eq!(
        ctl.flag_video("v1", None),
        ["Successfully flagged video: Amazing Cat Video (reason: Not supplied)"]
    );
    assert!(matches!(ctl.session().state(), PlaybackState::Playing(v) if v.id == "v2"));
}

#[test]
fn flag_and_allow_failures() {
    let mut ctl = controller();
    assert_eq!(
        ctl.flag_video("ghost", None),
        ["Cannot flag video: Video does not exist"]
    );
    ctl.flag_video("v1", None);
    assert_eq!(
        ctl.flag_video("v1", None),
        ["Cannot flag video: Video is already flagged"]
    );
    assert_eq!(
        ctl.allow_video("v2"),
        ["Cannot remove flag from video: Video is not flagged"]
    );
    assert_eq!(
        ctl.allow_video("ghost"),
        ["Cannot remove flag from video: Video does not exist"]
    );
    assert_eq!(
        ctl.allow_video("v1"),
        ["Successfully removed flag from video: Amazing Cat Video"]
    );
    assert_eq!(ctl.play("v1"), ["Playing video: Amazing Cat Video"]);
}

#[test]
fn playlist_lifecycle() {
    let mut ctl = controller();
    assert_eq!(ctl.show_all_playlists(), ["No playlists exist yet"]);

    assert_eq!(
        ctl.create_playlist("fun_list"),
        ["Successfully created new playlist: fun_list"]
    );
    assert_eq!(
        ctl.create_playlist("FUN_list"),
        ["Cannot create playlist: A playlist with the same name already exists"]
    );
    assert_eq!(
        ctl.create_playlist("bad name"),
        ["Cannot create playlist: Playlist name cannot contain whitespace"]
    );

    assert_eq!(
        ctl.show_playlist("FUN_LIST"),
        ["Showing playlist: FUN_LIST", "No videos here yet"]
    );
    assert_eq!(
        ctl.add_to_playlist("fun_list", "v1"),
        ["Added video to fun_list: Amazing Cat Video"]
    );
    assert_eq!(
        ctl.add_to_playlist("fun_list", "v1"),
        ["Cannot add video to fun_list: Video already added"]
    );
    assert_eq!(
        ctl.add_to_playlist("FUN_LIST", "d1"),
        ["Added video to FUN_LIST: Funny Dogs"]
    );

    ctl.flag_video("d1", Some("dogs"));
    assert_eq!(
        ctl.show_playlist("fun_list"),
        [
            "Showing playlist: fun_list",
            "Amazing Cat Video (v1) [#cat #funny]",
            "Funny Dogs (d1) [#dog #animal] - FLAGGED (reason: dogs)",
        ]
    );

    assert_eq!(
        ctl.remove_from_playlist("fun_list", "v1"),
        ["Removed video from fun_list: Amazing Cat Video"]
    );
    assert_eq!(
        ctl.remove_from_playlist("fun_list", "v1"),
        ["Cannot remove video from fun_list: Video is not in playlist"]
    );
    assert_eq!(
        ctl.clear_playlist("Fun_List"),
        ["Successfully removed all videos from Fun_List"]
    );

    ctl.create_playlist("Another");
    assert_eq!(
        ctl.show_all_playlists(),
        ["Showing all playlists:", "Another", "fun_list"]
    );

    assert_eq!(ctl.delete_playlist("FUN_LIST"), ["Deleted playlist: FUN_LIST"]);
    assert_eq!(
        ctl.delete_playlist("fun_list"),
        ["Cannot delete playlist fun_list: Playlist does not exist"]
    );
}

#[test]
fn playlist_errors_mention_typed_name() {
    let mut ctl = controller();
    assert_eq!(
        ctl.add_to_playlist("nope", "v1"),
        ["Cannot add video to nope: Playlist does not exist"]
    );
    assert_eq!(
        ctl.remove_from_playlist("nope", "v1"),
        ["Cannot remove video from nope: Playlist does not exist"]
    );
    assert_eq!(
        ctl.clear_playlist("nope"),
        ["Cannot clear playlist nope: Playlist does not exist"]
    );
    assert_eq!(
        ctl.show_playlist("nope"),
        ["Cannot show playlist nope: Playlist does not exist"]
    );

    ctl.create_playlist("list");
    assert_eq!(
        ctl.add_to_playlist("list", "ghost"),
        ["Cannot add video to list: Video does not exist"]
    );
    ctl.flag_video("v2", None);
    assert_eq!(
        ctl.add_to_playlist("list", "v2"),
        ["Cannot add video to list: Video is currently flagged (reason: Not supplied)"]
    );
    assert_eq!(
        ctl.remove_from_playlist("list", "ghost"),
        ["Cannot remove video from list: Video does not exist"]
    );
}

#[test]
fn search_then_choose() {
    let mut ctl = controller();
    let results = ctl.search_videos("cat");
    assert_eq!(
        results.lines()[1..3],
        [
            "1) Amazing Cat Video (v1) [#cat #funny]",
            "2) Another Cat Video (v2) [#cat]",
        ]
    );

    assert!(ctl.choose(&results, "abc").is_empty());
    assert_eq!(ctl.session().state(), &PlaybackState::Idle);

    assert_eq!(ctl.choose(&results, "2"), ["Playing video: Another Cat Video"]);
}

#[test]
fn tag_search_last_result_is_selectable() {
    let mut ctl = controller();
    let results = ctl.search_videos_with_tag("#cat");
    assert_eq!(results.len(), 2);
    assert_eq!(ctl.choose(&results, "2"), ["Playing video: Another Cat Video"]);
    assert!(ctl.choose(&results, "3").is_empty());
}
