<?xml version="1.0" encoding="UTF-8"?>
<WebElementEntity>
   <description>Tag input field for adding tags</description>
   <name>txt_TagInput</name>
   <tag></tag>
   <elementGuidId>review-tag-input</elementGuidId>
   <selectorCollection>
      <entry>
         <key>XPATH</key>
         <value>//input[@placeholder='Add tag' or @placeholder='Add a tag' or contains(@placeholder, 'tag')]</value>
      </entry>
      <entry>
         <key>CSS</key>
         <value>[data-testid='tag-input'], input[placeholder*='tag']</value>
      </entry>
   </selectorCollection>
   <selectorMethod>XPATH</selectorMethod>
   <useRalativeImagePath>false</useRalativeImagePath>
</WebElementEntity>
